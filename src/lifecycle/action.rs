//! Lifecycle actions.

use std::fmt;

/// An action that may move a download record between statuses.
///
/// `Pause`, `Resume`, `Cancel`, and `Retry` are user actions. `Complete` and
/// `Fail` stand in for the transfer outcome signals a real download engine
/// would emit; no engine exists, so they arrive through the same surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    /// Halt an in-flight download.
    Pause,
    /// Pick a paused download back up.
    Resume,
    /// Abandon a download for good.
    Cancel,
    /// Restart a failed download from the top.
    Retry,
    /// Record a finished transfer.
    Complete,
    /// Record a broken transfer.
    Fail,
}

impl LifecycleAction {
    /// All actions.
    pub const ALL: [Self; 6] = [
        Self::Pause,
        Self::Resume,
        Self::Cancel,
        Self::Retry,
        Self::Complete,
        Self::Fail,
    ];

    /// Returns the lowercase action name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Cancel => "cancel",
            Self::Retry => "retry",
            Self::Complete => "complete",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_action_as_str() {
        assert_eq!(LifecycleAction::Pause.as_str(), "pause");
        assert_eq!(LifecycleAction::Resume.as_str(), "resume");
        assert_eq!(LifecycleAction::Cancel.as_str(), "cancel");
        assert_eq!(LifecycleAction::Retry.as_str(), "retry");
        assert_eq!(LifecycleAction::Complete.as_str(), "complete");
        assert_eq!(LifecycleAction::Fail.as_str(), "fail");
    }

    #[test]
    fn test_action_display_matches_as_str() {
        for action in LifecycleAction::ALL {
            assert_eq!(action.to_string(), action.as_str());
        }
    }
}
