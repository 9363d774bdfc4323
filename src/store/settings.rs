//! Application settings persistence.
//!
//! Settings live in a single-row table. Readers treat an empty table as
//! "use defaults"; the first write creates the row. Follows the same
//! sibling-file pattern as the record operations in [`mod@super`]: the
//! [`Settings`] type plus an `impl DownloadStore` block.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use tracing::instrument;

use super::{DownloadStore, Result};

/// Default directory downloads are saved into.
pub const DEFAULT_DOWNLOAD_PATH: &str = "./downloads";

/// Default quality label for new downloads.
pub const DEFAULT_QUALITY: &str = "best";

/// Default number of simultaneous downloads.
pub const DEFAULT_CONCURRENT_DOWNLOADS: i64 = 3;

/// Accepted values for `default_quality`.
pub const QUALITY_CHOICES: [&str; 6] = ["best", "1080p", "720p", "480p", "360p", "worst"];

/// Accepted range for `concurrent_downloads`.
pub const CONCURRENT_DOWNLOADS_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

/// Settings validation errors.
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    /// Quality label is not one of the accepted choices.
    #[error(
        "unknown quality '{0}'\n  Suggestion: Use one of: best, 1080p, 720p, 480p, 360p, worst"
    )]
    UnknownQuality(String),

    /// Concurrent downloads value is outside the accepted range.
    #[error("concurrent downloads must be between 1 and 5, got {0}")]
    ConcurrencyOutOfRange(i64),
}

/// User-tunable application settings.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Directory downloads are saved into.
    pub download_path: String,
    /// Quality label applied to new downloads.
    pub default_quality: String,
    /// How many downloads may run at once.
    pub concurrent_downloads: i64,
    /// Whether to announce completed downloads.
    pub notify_on_complete: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            download_path: DEFAULT_DOWNLOAD_PATH.to_string(),
            default_quality: DEFAULT_QUALITY.to_string(),
            concurrent_downloads: DEFAULT_CONCURRENT_DOWNLOADS,
            notify_on_complete: true,
        }
    }
}

impl Settings {
    /// Checks field values against the accepted choices and ranges.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownQuality`] for an unrecognized quality
    /// label, or [`SettingsError::ConcurrencyOutOfRange`] when the concurrent
    /// download count falls outside 1..=5.
    pub fn validate(&self) -> std::result::Result<(), SettingsError> {
        if !QUALITY_CHOICES.contains(&self.default_quality.as_str()) {
            return Err(SettingsError::UnknownQuality(self.default_quality.clone()));
        }
        if !CONCURRENT_DOWNLOADS_RANGE.contains(&self.concurrent_downloads) {
            return Err(SettingsError::ConcurrencyOutOfRange(
                self.concurrent_downloads,
            ));
        }
        Ok(())
    }
}

impl DownloadStore {
    /// Reads the current settings, falling back to defaults when the
    /// settings table is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`](super::StoreError::Database) if the query fails.
    #[instrument(skip(self))]
    pub async fn settings(&self) -> Result<Settings> {
        let settings = sqlx::query_as::<_, Settings>(
            r"SELECT download_path, default_quality, concurrent_downloads, notify_on_complete
              FROM settings
              ORDER BY id
              LIMIT 1",
        )
        .fetch_optional(self.db().pool())
        .await?;

        Ok(settings.unwrap_or_default())
    }

    /// Writes settings, creating the row on first save.
    ///
    /// # Returns
    ///
    /// The settings as re-read from the database after the write.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`](super::StoreError::Database) if the write fails.
    #[instrument(skip(self, settings))]
    pub async fn update_settings(&self, settings: &Settings) -> Result<Settings> {
        let result = sqlx::query(
            r"UPDATE settings
              SET download_path = ?,
                  default_quality = ?,
                  concurrent_downloads = ?,
                  notify_on_complete = ?
              WHERE id = (SELECT MIN(id) FROM settings)",
        )
        .bind(&settings.download_path)
        .bind(&settings.default_quality)
        .bind(settings.concurrent_downloads)
        .bind(settings.notify_on_complete)
        .execute(self.db().pool())
        .await?;

        if result.rows_affected() == 0 {
            sqlx::query(
                r"INSERT INTO settings (download_path, default_quality, concurrent_downloads, notify_on_complete)
                  VALUES (?, ?, ?, ?)",
            )
            .bind(&settings.download_path)
            .bind(&settings.default_quality)
            .bind(settings.concurrent_downloads)
            .bind(settings.notify_on_complete)
            .execute(self.db().pool())
            .await?;
        }

        self.settings().await
    }
}
