//! Stream metadata probing.
//!
//! A probe answers "what is behind this stream URL" without downloading
//! anything. No real extraction is wired up; [`MockProber`] fabricates
//! stable metadata behind the same [`StreamProber`] contract a real
//! implementation would plug into.

mod metadata;
mod mock;

pub use metadata::{STREAM_QUALITIES, StreamMetadata};
pub use mock::{
    DEFAULT_PROBE_DELAY, LiveSignal, MOCK_DURATION_SECS, MOCK_STREAM_TITLE, MOCK_THUMBNAIL_URL,
    MockProber,
};

use async_trait::async_trait;
use thiserror::Error;

use crate::parser::StreamUrl;

/// Errors that can occur while probing a stream.
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    /// The stream information could not be fetched.
    #[error("failed to fetch stream information for '{url}': {reason}")]
    Unavailable {
        /// The stream URL that was probed
        url: String,
        /// Why the probe failed
        reason: String,
    },
}

/// Resolves stream metadata for a validated URL.
#[async_trait]
pub trait StreamProber: Send + Sync {
    /// Probes the stream behind `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Unavailable`] when metadata cannot be fetched.
    async fn probe(&self, url: &StreamUrl) -> Result<StreamMetadata, ProbeError>;
}
