//! Error types for stream URL parsing.

use thiserror::Error;

/// Maximum URL length to accept (standard browser limit).
/// URLs longer than this are rejected to prevent memory issues.
pub const MAX_URL_LENGTH: usize = 2000;

/// Errors that can occur while validating a stream URL.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input was empty or whitespace-only.
    #[error("no stream URL provided\n  Suggestion: Paste a link like https://kick.com/channelname")]
    EmptyInput,

    /// URL is malformed, uses the wrong scheme/host, or has a bad channel segment.
    #[error("invalid stream URL '{url}': {reason}\n  Suggestion: {suggestion}")]
    InvalidUrl {
        /// The URL that failed validation
        url: String,
        /// Why the URL is invalid
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// URL exceeds maximum allowed length.
    #[error(
        "URL too long ({length} chars, max {max}): {url_preview}...\n  Suggestion: Check for extraneous content pasted after the link"
    )]
    UrlTooLong {
        /// Truncated URL for display
        url_preview: String,
        /// Actual length
        length: usize,
        /// Maximum allowed
        max: usize,
    },
}

impl ParseError {
    /// Creates an `InvalidUrl` error for a non-https URL scheme.
    #[must_use]
    pub fn unsupported_scheme(url: &str, scheme: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: format!("scheme '{scheme}' is not supported"),
            suggestion: "Stream links use https:// (e.g., https://kick.com/channelname)".to_string(),
        }
    }

    /// Creates an `InvalidUrl` error for a malformed URL.
    #[must_use]
    pub fn malformed(url: &str, parse_error: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: parse_error.to_string(),
            suggestion: "Check the URL format and try again".to_string(),
        }
    }

    /// Creates an `InvalidUrl` error for a host other than kick.com.
    #[must_use]
    pub fn wrong_host(url: &str, host: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: format!("host '{host}' is not kick.com"),
            suggestion: "Use a Kick.com stream link (e.g., https://kick.com/channelname)"
                .to_string(),
        }
    }

    /// Creates an `InvalidUrl` error for a URL without a channel segment.
    #[must_use]
    pub fn missing_channel(url: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: "URL has no channel name".to_string(),
            suggestion: "Add the channel after the host (e.g., https://kick.com/channelname)"
                .to_string(),
        }
    }

    /// Creates an `InvalidUrl` error for a channel segment with bad characters.
    #[must_use]
    pub fn invalid_channel(url: &str, channel: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: format!("channel name '{channel}' contains unsupported characters"),
            suggestion: "Channel names use letters, numbers, underscores, and hyphens".to_string(),
        }
    }

    /// Creates a `UrlTooLong` error for URLs exceeding the maximum length.
    #[must_use]
    pub fn too_long(url: &str) -> Self {
        Self::UrlTooLong {
            url_preview: url.chars().take(50).collect(),
            length: url.len(),
            max: MAX_URL_LENGTH,
        }
    }
}
