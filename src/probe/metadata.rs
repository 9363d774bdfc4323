//! Stream metadata types.

use serde::Serialize;

/// Quality labels offered for a probed stream, best first.
pub const STREAM_QUALITIES: [&str; 7] = [
    "1080p60", "1080p", "720p60", "720p", "480p", "360p", "160p",
];

/// Metadata describing a probed stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamMetadata {
    /// Stream title.
    pub title: String,
    /// Channel the stream belongs to.
    pub channel: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Stream length in seconds.
    pub duration_secs: i64,
    /// When the stream was seen, RFC 3339.
    pub streamed_at: String,
    /// Whether the channel was live at probe time.
    pub is_live: bool,
    /// Offered quality labels, best first.
    pub qualities: Vec<String>,
}

impl StreamMetadata {
    /// Returns `true` when the given label is offered for this stream.
    #[must_use]
    pub fn offers_quality(&self, quality: &str) -> bool {
        self.qualities.iter().any(|q| q == quality)
    }

    /// Returns the best offered quality, when any are listed.
    #[must_use]
    pub fn best_quality(&self) -> Option<&str> {
        self.qualities.first().map(String::as_str)
    }
}
