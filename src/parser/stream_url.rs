//! Stream URL validation and channel extraction.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use super::error::{MAX_URL_LENGTH, ParseError};

/// Hosts accepted as stream sources.
pub const STREAM_HOSTS: [&str; 2] = ["kick.com", "www.kick.com"];

/// Regex pattern for valid channel names.
/// Channel names are a single path segment of letters, digits, underscores, and hyphens.
#[allow(clippy::expect_used)]
static CHANNEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]+$").expect("channel regex is valid") // Static pattern, safe to panic
});

/// A validated Kick stream URL.
///
/// Construction goes through [`StreamUrl::parse`], so holding one is proof
/// the URL passed validation: https scheme, kick.com host, and a well-formed
/// channel segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamUrl {
    url: String,
    channel: String,
}

impl StreamUrl {
    /// Validates raw input and produces a normalized stream URL.
    ///
    /// # Validation rules:
    /// - Must not be empty after trimming
    /// - Must not exceed `MAX_URL_LENGTH` (2000 chars)
    /// - Must be parseable by the `url` crate
    /// - Must use the https scheme
    /// - Must have a kick.com or www.kick.com host
    /// - First path segment (the channel) must match `[a-zA-Z0-9_-]+`
    ///
    /// Extra path segments after the channel are accepted and preserved.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first rule the input broke.
    #[tracing::instrument(skip(input), fields(input_len = input.len()))]
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Check URL length first (prevents memory issues with very long URLs)
        if trimmed.len() > MAX_URL_LENGTH {
            return Err(ParseError::too_long(trimmed));
        }

        let parsed =
            Url::parse(trimmed).map_err(|e| ParseError::malformed(trimmed, &e.to_string()))?;

        // Stream links are https-only
        match parsed.scheme() {
            "https" => {}
            scheme => return Err(ParseError::unsupported_scheme(trimmed, scheme)),
        }

        let host = parsed.host_str().unwrap_or_default();
        if !STREAM_HOSTS.contains(&host) {
            return Err(ParseError::wrong_host(trimmed, host));
        }

        let channel = parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .unwrap_or_default();
        if channel.is_empty() {
            return Err(ParseError::missing_channel(trimmed));
        }
        if !CHANNEL_PATTERN.is_match(channel) {
            return Err(ParseError::invalid_channel(trimmed, channel));
        }

        let channel = channel.to_string();
        let url = parsed.to_string();
        debug!(url = %url, channel = %channel, "stream URL validated");

        Ok(Self { url, channel })
    }

    /// Returns the normalized URL string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Returns the channel name extracted from the URL path.
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Consumes the value and returns the normalized URL string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.url
    }
}

impl fmt::Display for StreamUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
