//! Download record types and status definitions.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Title shown for records whose stream title was never resolved.
pub const UNTITLED_STREAM: &str = "Untitled Stream";

/// Lifecycle status of a download record.
///
/// Stored as lowercase text in the database; the schema carries a matching
/// CHECK constraint so no other value can reach a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum DownloadStatus {
    /// Transfer in flight.
    Downloading,
    /// Halted by the user; can pick back up where it left off.
    Paused,
    /// Finished successfully.
    Completed,
    /// Stopped by an error; eligible for retry.
    Failed,
    /// Abandoned by the user.
    Cancelled,
}

impl DownloadStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Downloading,
        Self::Paused,
        Self::Completed,
        Self::Failed,
        Self::Cancelled,
    ];

    /// Returns the database string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Downloading => "downloading",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns `true` for states that accept no further lifecycle actions.
    ///
    /// `Failed` is not terminal: a failed download can still be retried.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns `true` for states shown on the active downloads view.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Downloading | Self::Paused)
    }
}

impl fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DownloadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "downloading" => Ok(Self::Downloading),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid download status: {s}")),
        }
    }
}

/// Payload for creating a download record.
///
/// New records have no id (the database assigns one), no file fields
/// (those are written at completion), and no status (every download
/// starts out `downloading`). Borrowed fields keep submission allocation-free.
#[derive(Debug, Clone, Default)]
pub struct NewDownload<'a> {
    /// The validated stream URL.
    pub stream_url: &'a str,
    /// Stream title from the metadata probe, if resolved.
    pub stream_title: Option<&'a str>,
    /// RFC 3339 timestamp of submission.
    pub download_date: &'a str,
    /// Thumbnail URL from the metadata probe.
    pub thumbnail: Option<&'a str>,
    /// Chosen quality label.
    pub quality: Option<&'a str>,
    /// Stream duration in seconds.
    pub duration: Option<i64>,
}

/// A single persisted download record.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRecord {
    /// Unique identifier.
    pub id: i64,
    /// The stream URL this download was created from.
    pub stream_url: String,
    /// Stream title, if the probe resolved one.
    pub stream_title: Option<String>,
    /// RFC 3339 timestamp of when the download was submitted.
    pub download_date: String,
    /// Saved file size in bytes, set at completion.
    pub file_size: Option<i64>,
    /// Saved file path, set at completion.
    pub file_path: Option<String>,
    /// Current lifecycle status.
    pub status: DownloadStatus,
    /// Thumbnail URL captured at submission.
    pub thumbnail: Option<String>,
    /// Chosen quality label.
    pub quality: Option<String>,
    /// Stream duration in seconds.
    pub duration: Option<i64>,
}

impl DownloadRecord {
    /// Returns the stream title, or a placeholder when none was resolved.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.stream_title.as_deref().unwrap_or(UNTITLED_STREAM)
    }
}

impl fmt::Display for DownloadRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DownloadRecord {{ id: {}, url: {}, status: {} }}",
            self.id, self.stream_url, self.status
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(id: i64, status: DownloadStatus) -> DownloadRecord {
        DownloadRecord {
            id,
            stream_url: "https://kick.com/alice".to_string(),
            stream_title: Some("Weekend Gaming Stream".to_string()),
            download_date: "2025-01-10T12:00:00.000Z".to_string(),
            file_size: None,
            file_path: None,
            status,
            thumbnail: None,
            quality: Some("best".to_string()),
            duration: Some(7200),
        }
    }

    // ==================== DownloadStatus Tests ====================

    #[test]
    fn test_download_status_as_str() {
        assert_eq!(DownloadStatus::Downloading.as_str(), "downloading");
        assert_eq!(DownloadStatus::Paused.as_str(), "paused");
        assert_eq!(DownloadStatus::Completed.as_str(), "completed");
        assert_eq!(DownloadStatus::Failed.as_str(), "failed");
        assert_eq!(DownloadStatus::Cancelled.as_str(), "cancelled");
    }

    #[test]
    fn test_download_status_display() {
        assert_eq!(DownloadStatus::Downloading.to_string(), "downloading");
        assert_eq!(DownloadStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn test_download_status_from_str_valid() {
        for status in DownloadStatus::ALL {
            assert_eq!(
                status.as_str().parse::<DownloadStatus>().unwrap(),
                status,
                "round-trip failed for {status}"
            );
        }
    }

    #[test]
    fn test_download_status_from_str_invalid() {
        let result = "exploded".parse::<DownloadStatus>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("invalid download status"));
    }

    #[test]
    fn test_download_status_from_str_rejects_mixed_case() {
        assert!("Downloading".parse::<DownloadStatus>().is_err());
        assert!("PAUSED".parse::<DownloadStatus>().is_err());
    }

    #[test]
    fn test_download_status_serde_roundtrip() {
        let status = DownloadStatus::Downloading;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"downloading\"");
        let parsed: DownloadStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, status);
    }

    #[test]
    fn test_download_status_terminal_states() {
        assert!(DownloadStatus::Completed.is_terminal());
        assert!(DownloadStatus::Cancelled.is_terminal());
        assert!(!DownloadStatus::Downloading.is_terminal());
        assert!(!DownloadStatus::Paused.is_terminal());
        assert!(!DownloadStatus::Failed.is_terminal());
    }

    #[test]
    fn test_download_status_active_states() {
        assert!(DownloadStatus::Downloading.is_active());
        assert!(DownloadStatus::Paused.is_active());
        assert!(!DownloadStatus::Completed.is_active());
        assert!(!DownloadStatus::Failed.is_active());
        assert!(!DownloadStatus::Cancelled.is_active());
    }

    // ==================== DownloadRecord Tests ====================

    #[test]
    fn test_record_display_title_present() {
        let rec = record(1, DownloadStatus::Downloading);
        assert_eq!(rec.display_title(), "Weekend Gaming Stream");
    }

    #[test]
    fn test_record_display_title_fallback() {
        let mut rec = record(1, DownloadStatus::Downloading);
        rec.stream_title = None;
        assert_eq!(rec.display_title(), "Untitled Stream");
    }

    #[test]
    fn test_record_display() {
        let rec = record(42, DownloadStatus::Paused);
        let display = rec.to_string();
        assert!(display.contains("42"));
        assert!(display.contains("kick.com/alice"));
        assert!(display.contains("paused"));
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let rec = record(1, DownloadStatus::Completed);
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"streamUrl\""));
        assert!(json.contains("\"downloadDate\""));
        assert!(json.contains("\"status\":\"completed\""));
    }

    #[test]
    fn test_new_download_default_is_empty() {
        let new = NewDownload::default();
        assert_eq!(new.stream_url, "");
        assert!(new.stream_title.is_none());
        assert!(new.quality.is_none());
    }
}
