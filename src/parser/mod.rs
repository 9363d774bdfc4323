//! Stream URL parsing module.
//!
//! Validates user-supplied stream links before anything else touches them.
//! A [`StreamUrl`] can only be built from input that passed every rule, so
//! downstream code never re-checks.
//!
//! # Current Support
//!
//! - Kick.com channel links (`https://kick.com/<channel>`, `www.` accepted)
//!
//! # Example
//!
//! ```
//! use streamcatch_core::parser::StreamUrl;
//!
//! # fn main() -> Result<(), streamcatch_core::parser::ParseError> {
//! let url = StreamUrl::parse("https://kick.com/alice")?;
//! assert_eq!(url.channel(), "alice");
//! assert_eq!(url.as_str(), "https://kick.com/alice");
//! # Ok(())
//! # }
//! ```

mod error;
mod stream_url;

pub use error::{MAX_URL_LENGTH, ParseError};
pub use stream_url::{STREAM_HOSTS, StreamUrl};
