//! User-facing notifications for download lifecycle changes.
//!
//! Every state change surfaces a short headline plus a one-line body
//! naming the stream. [`DownloadEvent`] owns the wording; [`Notifier`]
//! is the delivery seam so command handlers stay testable.

use tracing::info;

use crate::lifecycle::LifecycleAction;

/// A notifiable moment in a download's life.
///
/// Retrying a failed download reports as a resume: the stream is simply
/// downloading again, and callers only see the corrected status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadEvent<'a> {
    /// A new download was accepted and is now running.
    Started { title: &'a str },
    /// A running download was paused.
    Paused { title: &'a str },
    /// A paused or failed download is downloading again.
    Resumed { title: &'a str },
    /// A download was cancelled and will not restart.
    Cancelled { title: &'a str },
    /// A download finished and its file is on disk.
    Completed { title: &'a str },
    /// A download gave up.
    Failed { title: &'a str },
    /// The user asked to reveal a finished file.
    OpenLocation { path: &'a str },
}

impl<'a> DownloadEvent<'a> {
    /// Maps a lifecycle action onto the event it should announce.
    #[must_use]
    pub fn for_action(action: LifecycleAction, title: &'a str) -> Self {
        match action {
            LifecycleAction::Pause => Self::Paused { title },
            LifecycleAction::Resume | LifecycleAction::Retry => Self::Resumed { title },
            LifecycleAction::Cancel => Self::Cancelled { title },
            LifecycleAction::Complete => Self::Completed { title },
            LifecycleAction::Fail => Self::Failed { title },
        }
    }

    /// Short headline for the event.
    #[must_use]
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Started { .. } => "Download Started",
            Self::Paused { .. } => "Download Paused",
            Self::Resumed { .. } => "Download Resumed",
            Self::Cancelled { .. } => "Download Cancelled",
            Self::Completed { .. } => "Download Complete",
            Self::Failed { .. } => "Download Failed",
            Self::OpenLocation { .. } => "Open Location",
        }
    }

    /// One-line body naming the stream (or the file location).
    #[must_use]
    pub fn body(&self) -> String {
        match self {
            Self::Started { title } => format!("\"{title}\" is now downloading"),
            Self::Paused { title } => format!("\"{title}\" has been paused"),
            Self::Resumed { title } => format!("\"{title}\" has been resumed"),
            Self::Cancelled { title } => format!("\"{title}\" has been cancelled"),
            Self::Completed { title } => format!("\"{title}\" has finished downloading"),
            Self::Failed { title } => format!("\"{title}\" could not be downloaded"),
            Self::OpenLocation { path } => format!("Would open: {path}"),
        }
    }
}

/// Delivery seam for download notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: &DownloadEvent<'_>);
}

/// Prints notifications to stdout, mirroring them into the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, event: &DownloadEvent<'_>) {
        let headline = event.headline();
        let body = event.body();
        info!(%headline, %body, "notification");
        println!("{headline}: {body}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Captures events for assertions instead of printing them.
    #[derive(Default)]
    struct RecordingNotifier {
        seen: Mutex<Vec<(String, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, event: &DownloadEvent<'_>) {
            self.seen
                .lock()
                .unwrap()
                .push((event.headline().to_string(), event.body()));
        }
    }

    // ==================== Wording ====================

    #[test]
    fn started_event_names_the_stream() {
        let event = DownloadEvent::Started {
            title: "Weekend Gaming Stream",
        };
        assert_eq!(event.headline(), "Download Started");
        assert_eq!(event.body(), "\"Weekend Gaming Stream\" is now downloading");
    }

    #[test]
    fn pause_resume_cancel_bodies_use_past_tense() {
        assert_eq!(
            DownloadEvent::Paused { title: "A" }.body(),
            "\"A\" has been paused"
        );
        assert_eq!(
            DownloadEvent::Resumed { title: "A" }.body(),
            "\"A\" has been resumed"
        );
        assert_eq!(
            DownloadEvent::Cancelled { title: "A" }.body(),
            "\"A\" has been cancelled"
        );
    }

    #[test]
    fn completion_and_failure_have_distinct_headlines() {
        assert_eq!(
            DownloadEvent::Completed { title: "A" }.headline(),
            "Download Complete"
        );
        assert_eq!(
            DownloadEvent::Failed { title: "A" }.headline(),
            "Download Failed"
        );
        assert_eq!(
            DownloadEvent::Failed { title: "A" }.body(),
            "\"A\" could not be downloaded"
        );
    }

    #[test]
    fn open_location_reports_the_path_verbatim() {
        let event = DownloadEvent::OpenLocation {
            path: "./downloads/stream.mp4",
        };
        assert_eq!(event.headline(), "Open Location");
        assert_eq!(event.body(), "Would open: ./downloads/stream.mp4");
    }

    // ==================== Action Mapping ====================

    #[test]
    fn each_action_maps_to_its_event() {
        let cases = [
            (LifecycleAction::Pause, "Download Paused"),
            (LifecycleAction::Resume, "Download Resumed"),
            (LifecycleAction::Cancel, "Download Cancelled"),
            (LifecycleAction::Complete, "Download Complete"),
            (LifecycleAction::Fail, "Download Failed"),
        ];
        for (action, headline) in cases {
            assert_eq!(DownloadEvent::for_action(action, "A").headline(), headline);
        }
    }

    #[test]
    fn retry_reports_as_resumed() {
        let event = DownloadEvent::for_action(LifecycleAction::Retry, "A");
        assert_eq!(event, DownloadEvent::Resumed { title: "A" });
    }

    // ==================== Delivery ====================

    #[test]
    fn notifier_receives_headline_and_body() {
        let notifier = RecordingNotifier::default();
        notifier.notify(&DownloadEvent::Started { title: "Late Show" });
        let seen = notifier.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "Download Started");
        assert_eq!(seen[0].1, "\"Late Show\" is now downloading");
    }
}
