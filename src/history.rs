//! Filtering for the download history view.
//!
//! History is a read-only projection over stored download records. The
//! store returns records newest-first and this module narrows that list
//! by status and by a case-insensitive search term, preserving order.

use std::fmt;
use std::str::FromStr;

use crate::store::{DownloadRecord, DownloadStatus};

/// Status dimension of a history query.
///
/// `All` matches every record. `Only` matches records whose status equals
/// the given one exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Match records in any status.
    #[default]
    All,
    /// Match only records in the given status.
    Only(DownloadStatus),
}

impl StatusFilter {
    /// Returns `true` when `status` passes this filter.
    #[must_use]
    pub fn matches(self, status: DownloadStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == wanted,
        }
    }

    /// Canonical lowercase form, matching the accepted input tokens.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        DownloadStatus::from_str(s).map(Self::Only)
    }
}

/// A history query combining a status filter with an optional search term.
///
/// The default query matches everything.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    /// Status dimension. Defaults to [`StatusFilter::All`].
    pub status: StatusFilter,
    /// Case-insensitive substring matched against the stream title and
    /// URL. `None` and the empty string both mean "no search".
    pub search: Option<String>,
}

impl HistoryQuery {
    /// Query that matches every record.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts the query to a single status.
    #[must_use]
    pub fn with_status(mut self, status: DownloadStatus) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    /// Sets the search term.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Returns `true` when `record` satisfies both dimensions.
    ///
    /// The search term matches when it is a case-insensitive substring of
    /// either the stream title or the stream URL. A record without a title
    /// can still match through its URL.
    #[must_use]
    pub fn matches(&self, record: &DownloadRecord) -> bool {
        if !self.status.matches(record.status) {
            return false;
        }
        match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                let title_hit = record
                    .stream_title
                    .as_deref()
                    .is_some_and(|title| title.to_lowercase().contains(&term));
                title_hit || record.stream_url.to_lowercase().contains(&term)
            }
        }
    }
}

/// Filters `records` down to those matching `query`, preserving order.
#[must_use]
pub fn filter_records<'r>(
    records: &'r [DownloadRecord],
    query: &HistoryQuery,
) -> Vec<&'r DownloadRecord> {
    records.iter().filter(|record| query.matches(record)).collect()
}
