//! Checkout lifecycle
//!
//! ```text
//! Idle ──pay──▶ Processing ──▶ Succeeded
//!  │                 │
//!  │                 ▼ (gateway error)
//!  ▼               Failed
//! Cancelled ◀────────┘
//! ```
//!
//! There is no way back from `Failed` to `Processing`.

use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Idle,
    Processing,
    Succeeded,
    Failed,
    Cancelled,
}

impl PaymentStatus {
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Cancelled)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Processing => "processing",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        })
    }
}

#[must_use]
pub fn allowed_transitions(from: PaymentStatus) -> &'static [PaymentStatus] {
    use PaymentStatus::*;
    match from {
        Idle => &[Processing, Cancelled],
        Processing => &[Succeeded, Failed],
        Failed => &[Cancelled],
        Succeeded | Cancelled => &[],
    }
}

/// # Errors
/// - `IllegalTransition` when `to` is not reachable from `from`
pub fn validate_transition(from: PaymentStatus, to: PaymentStatus) -> Result<(), PaymentError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(PaymentError::IllegalTransition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PaymentStatus::*;

    #[test]
    fn failed_can_only_be_cancelled() {
        assert_eq!(allowed_transitions(Failed), &[Cancelled]);
        assert_eq!(
            validate_transition(Failed, Processing),
            Err(PaymentError::IllegalTransition { from: Failed, to: Processing })
        );
    }

    #[test]
    fn terminal_states_are_final() {
        for to in [Idle, Processing, Succeeded, Failed, Cancelled] {
            assert!(validate_transition(Succeeded, to).is_err());
            assert!(validate_transition(Cancelled, to).is_err());
        }
    }

    #[test]
    fn processing_cannot_be_cancelled() {
        assert_eq!(
            validate_transition(Processing, Cancelled),
            Err(PaymentError::IllegalTransition { from: Processing, to: Cancelled })
        );
    }
}
