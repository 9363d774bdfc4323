//! Streamcatch Core Library
//!
//! This library provides the core functionality for the streamcatch tool,
//! which queues Kick live streams for download and tracks every download
//! through its full lifecycle, from submission to a terminal state.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`db`] - Database connection and schema management
//! - [`parser`] - Stream URL validation and channel extraction
//! - [`probe`] - Stream metadata lookup (mock transport)
//! - [`store`] - Download record and settings persistence
//! - [`lifecycle`] - Status transition rules and the controller driving them
//! - [`history`] - Filtering for the history view
//! - [`notify`] - User-facing notifications for state changes
//!
//! Transfers themselves are simulated: [`progress`] fabricates percentages
//! and [`clock`] supplies timestamps, both behind seams so tests can pin
//! their output.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod db;
pub mod history;
pub mod lifecycle;
pub mod notify;
pub mod parser;
pub mod probe;
pub mod progress;
pub mod store;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use db::Database;
pub use history::{HistoryQuery, StatusFilter, filter_records};
pub use lifecycle::{
    FileOutcome, LifecycleAction, LifecycleController, LifecycleError, SubmitRequest,
    TransitionError, next_status,
};
pub use notify::{DownloadEvent, Notifier, TerminalNotifier};
pub use parser::{ParseError, StreamUrl};
pub use probe::{MockProber, ProbeError, StreamMetadata, StreamProber};
pub use progress::{FixedProgress, ProgressSource, RandomProgress};
pub use store::{
    DownloadRecord, DownloadRepository, DownloadStatus, DownloadStore, MemoryStore, NewDownload,
    Settings, StoreError,
};
