//! The status transition function.

use thiserror::Error;

use super::LifecycleAction;
use crate::store::DownloadStatus;

/// A rejected status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {action} a {from} download")]
pub struct TransitionError {
    /// Status the record was in.
    pub from: DownloadStatus,
    /// Action that was attempted.
    pub action: LifecycleAction,
}

/// Computes the status an action leads to from a given status.
///
/// This is the whole state machine; every status change in the crate goes
/// through here.
///
/// | From                | Action   | To          |
/// |---------------------|----------|-------------|
/// | downloading         | pause    | paused      |
/// | paused              | resume   | downloading |
/// | downloading, paused | cancel   | cancelled   |
/// | failed              | retry    | downloading |
/// | downloading, paused | complete | completed   |
/// | downloading, paused | fail     | failed      |
///
/// `completed` and `cancelled` are terminal and accept nothing. `failed`
/// accepts only `retry`.
///
/// # Errors
///
/// Returns [`TransitionError`] for every pair not in the table.
pub fn next_status(
    from: DownloadStatus,
    action: LifecycleAction,
) -> Result<DownloadStatus, TransitionError> {
    use DownloadStatus as S;
    use LifecycleAction as A;

    match (from, action) {
        (S::Downloading, A::Pause) => Ok(S::Paused),
        (S::Paused, A::Resume) => Ok(S::Downloading),
        (S::Downloading | S::Paused, A::Cancel) => Ok(S::Cancelled),
        (S::Failed, A::Retry) => Ok(S::Downloading),
        (S::Downloading | S::Paused, A::Complete) => Ok(S::Completed),
        (S::Downloading | S::Paused, A::Fail) => Ok(S::Failed),
        _ => Err(TransitionError { from, action }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use DownloadStatus as S;
    use LifecycleAction as A;

    // ==================== Accepted Transitions ====================

    #[test]
    fn test_pause_from_downloading() {
        assert_eq!(next_status(S::Downloading, A::Pause).unwrap(), S::Paused);
    }

    #[test]
    fn test_resume_from_paused() {
        assert_eq!(next_status(S::Paused, A::Resume).unwrap(), S::Downloading);
    }

    #[test]
    fn test_cancel_from_either_active_state() {
        assert_eq!(next_status(S::Downloading, A::Cancel).unwrap(), S::Cancelled);
        assert_eq!(next_status(S::Paused, A::Cancel).unwrap(), S::Cancelled);
    }

    #[test]
    fn test_retry_from_failed() {
        assert_eq!(next_status(S::Failed, A::Retry).unwrap(), S::Downloading);
    }

    #[test]
    fn test_complete_from_either_active_state() {
        assert_eq!(
            next_status(S::Downloading, A::Complete).unwrap(),
            S::Completed
        );
        assert_eq!(next_status(S::Paused, A::Complete).unwrap(), S::Completed);
    }

    #[test]
    fn test_fail_from_either_active_state() {
        assert_eq!(next_status(S::Downloading, A::Fail).unwrap(), S::Failed);
        assert_eq!(next_status(S::Paused, A::Fail).unwrap(), S::Failed);
    }

    // ==================== Rejected Transitions ====================

    #[test]
    fn test_terminal_states_accept_nothing() {
        for from in [S::Completed, S::Cancelled] {
            for action in A::ALL {
                let result = next_status(from, action);
                assert!(
                    result.is_err(),
                    "{from} should reject {action}, got {result:?}"
                );
            }
        }
    }

    #[test]
    fn test_failed_accepts_only_retry() {
        for action in A::ALL {
            let result = next_status(S::Failed, action);
            if action == A::Retry {
                assert_eq!(result.unwrap(), S::Downloading);
            } else {
                assert!(
                    result.is_err(),
                    "failed should reject {action}, got {result:?}"
                );
            }
        }
    }

    #[test]
    fn test_downloading_rejects_resume_and_retry() {
        assert!(next_status(S::Downloading, A::Resume).is_err());
        assert!(next_status(S::Downloading, A::Retry).is_err());
    }

    #[test]
    fn test_paused_rejects_pause_and_retry() {
        assert!(next_status(S::Paused, A::Pause).is_err());
        assert!(next_status(S::Paused, A::Retry).is_err());
    }

    #[test]
    fn test_rejection_error_names_both_parts() {
        let err = next_status(S::Cancelled, A::Resume).unwrap_err();
        assert_eq!(err.from, S::Cancelled);
        assert_eq!(err.action, A::Resume);
        assert_eq!(err.to_string(), "cannot resume a cancelled download");
    }
}
