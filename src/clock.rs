//! Time source abstraction for record timestamps.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

/// Time source for submission dates and age display.
///
/// Production code uses [`SystemClock`]; tests inject [`FixedClock`] so
/// timestamps come out deterministic.
pub trait Clock: Send + Sync {
    /// Returns the current moment in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current moment as an RFC 3339 string with millisecond
    /// precision and a `Z` suffix. This is the format stored in
    /// `download_date`, chosen so lexicographic order matches time order.
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant, advanced manually.
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock pinned to the given instant.
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    /// Creates a clock pinned to the instant in an RFC 3339 string.
    ///
    /// # Errors
    ///
    /// Returns the underlying chrono error when the string does not parse.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self::new(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc)))
    }

    /// Moves the clock forward by the given delta.
    pub fn advance(&self, delta: TimeDelta) {
        let mut instant = self.instant.lock().unwrap_or_else(PoisonError::into_inner);
        *instant += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
