//! Mock prober with canned metadata.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

use super::{ProbeError, STREAM_QUALITIES, StreamMetadata, StreamProber};
use crate::clock::Clock;
use crate::parser::StreamUrl;

/// Simulated probe latency.
pub const DEFAULT_PROBE_DELAY: Duration = Duration::from_millis(1500);

/// Canned stream title.
pub const MOCK_STREAM_TITLE: &str = "Weekend Gaming Stream";

/// Canned thumbnail image.
pub const MOCK_THUMBNAIL_URL: &str =
    "https://images.unsplash.com/photo-1542751371-adc38448a05e?q=80&w=2070&auto=format&fit=crop";

/// Canned stream duration (two hours).
pub const MOCK_DURATION_SECS: i64 = 7200;

/// How the mock decides whether a channel is live.
#[derive(Debug, Clone, Copy)]
pub enum LiveSignal {
    /// Fair coin flip per probe.
    Random,
    /// Always the given answer; used by tests.
    Fixed(bool),
}

impl LiveSignal {
    fn sample(self) -> bool {
        match self {
            Self::Random => rand::thread_rng().gen_bool(0.5),
            Self::Fixed(value) => value,
        }
    }
}

/// Prober that fabricates metadata instead of talking to any service.
///
/// Every probe answers with the same canned stream (title, thumbnail, two
/// hour duration, full quality ladder); only the channel, the probe
/// timestamp, and the live flag vary.
pub struct MockProber {
    clock: Arc<dyn Clock>,
    delay: Duration,
    live_signal: LiveSignal,
}

impl MockProber {
    /// Creates a mock prober with the default latency and a random live flag.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            delay: DEFAULT_PROBE_DELAY,
            live_signal: LiveSignal::Random,
        }
    }

    /// Overrides the simulated latency.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Overrides the live-flag source.
    #[must_use]
    pub fn with_live_signal(mut self, live_signal: LiveSignal) -> Self {
        self.live_signal = live_signal;
        self
    }
}

#[async_trait]
impl StreamProber for MockProber {
    async fn probe(&self, url: &StreamUrl) -> Result<StreamMetadata, ProbeError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let metadata = StreamMetadata {
            title: MOCK_STREAM_TITLE.to_string(),
            channel: url.channel().to_string(),
            thumbnail: MOCK_THUMBNAIL_URL.to_string(),
            duration_secs: MOCK_DURATION_SECS,
            streamed_at: self.clock.timestamp(),
            is_live: self.live_signal.sample(),
            qualities: STREAM_QUALITIES.iter().map(ToString::to_string).collect(),
        };
        debug!(channel = %metadata.channel, is_live = metadata.is_live, "probed stream");

        Ok(metadata)
    }
}
