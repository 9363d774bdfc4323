//! Download lifecycle state machine.
//!
//! Records move among five statuses: `downloading` (initial), `paused`,
//! `completed`, `failed`, and `cancelled`. The legal moves live in one pure
//! function, [`next_status`]; the [`LifecycleController`] wraps it with
//! repository access so every status change is validated before it is
//! written.
//!
//! # Overview
//!
//! - [`LifecycleAction`] - What a caller can ask for
//! - [`next_status`] - The transition table as a function
//! - [`LifecycleController`] - Record creation plus validated transitions
//! - [`LifecycleError`] - Operation error types
//!
//! # Example
//!
//! ```
//! use streamcatch_core::lifecycle::{LifecycleAction, next_status};
//! use streamcatch_core::store::DownloadStatus;
//!
//! // Legal move
//! let next = next_status(DownloadStatus::Downloading, LifecycleAction::Pause);
//! assert_eq!(next.unwrap(), DownloadStatus::Paused);
//!
//! // Terminal states accept nothing
//! assert!(next_status(DownloadStatus::Cancelled, LifecycleAction::Resume).is_err());
//! ```

mod action;
mod controller;
mod transition;

pub use action::LifecycleAction;
pub use controller::{
    FileOutcome, LifecycleController, LifecycleError, Result, SubmitRequest,
};
pub use transition::{TransitionError, next_status};
