// Alert status state machine
//
// `pending` is the entry state; `resolved` and `frozen` are terminal.
// Re-applying the current status is a no-op so a retried PUT stays
// idempotent. Everything not listed here is rejected.

use thiserror::Error;

use crate::value_objects::AlertStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The status changed; the caller must stamp `updatedAt` and persist.
    Applied(AlertStatus),
    /// Requested status equals the current one; record stays untouched.
    Noop,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid status transition from {from} to {to}")]
pub struct InvalidTransition {
    pub from: AlertStatus,
    pub to: AlertStatus,
}

pub fn apply_transition(
    current: AlertStatus,
    requested: AlertStatus,
) -> Result<TransitionOutcome, InvalidTransition> {
    use AlertStatus::*;

    if current == requested {
        return Ok(TransitionOutcome::Noop);
    }
    let allowed = match (current, requested) {
        (Pending, UnderReview) => true,
        (Pending | UnderReview, Resolved) => true,
        (Pending | UnderReview, Frozen) => true,
        _ => false,
    };
    if allowed {
        Ok(TransitionOutcome::Applied(requested))
    } else {
        Err(InvalidTransition {
            from: current,
            to: requested,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AlertStatus::*;

    #[test]
    fn review_then_resolve_succeeds() {
        assert_eq!(
            apply_transition(Pending, UnderReview),
            Ok(TransitionOutcome::Applied(UnderReview))
        );
        assert_eq!(
            apply_transition(UnderReview, Resolved),
            Ok(TransitionOutcome::Applied(Resolved))
        );
    }

    #[test]
    fn freeze_from_either_active_state() {
        assert_eq!(
            apply_transition(Pending, Frozen),
            Ok(TransitionOutcome::Applied(Frozen))
        );
        assert_eq!(
            apply_transition(UnderReview, Frozen),
            Ok(TransitionOutcome::Applied(Frozen))
        );
    }

    #[test]
    fn terminal_states_are_sticky() {
        let err = apply_transition(Resolved, Pending).unwrap_err();
        assert_eq!(err.from, Resolved);
        assert_eq!(err.to, Pending);
        assert!(apply_transition(Frozen, UnderReview).is_err());
        assert!(apply_transition(Resolved, Frozen).is_err());
    }

    #[test]
    fn reapplying_current_status_is_noop() {
        assert_eq!(apply_transition(Frozen, Frozen), Ok(TransitionOutcome::Noop));
        assert_eq!(apply_transition(Pending, Pending), Ok(TransitionOutcome::Noop));
    }

    #[test]
    fn review_cannot_return_to_pending() {
        assert!(apply_transition(UnderReview, Pending).is_err());
    }
}
