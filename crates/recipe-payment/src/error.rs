//! Payment errors

use crate::status::PaymentStatus;
use thiserror::Error;

/// Errors raised by a payment session or gateway
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaymentError {
    #[error("illegal payment transition: {from} -> {to}")]
    IllegalTransition {
        from: PaymentStatus,
        to: PaymentStatus,
    },

    #[error("payment initialization failed: {0}")]
    Gateway(String),
}

impl PaymentError {
    /// The gateway declined or errored (never the simulated one)
    #[inline]
    #[must_use]
    pub fn is_gateway(&self) -> bool {
        matches!(self, Self::Gateway(_))
    }

    #[inline]
    #[must_use]
    pub fn is_illegal_transition(&self) -> bool {
        matches!(self, Self::IllegalTransition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let declined = PaymentError::Gateway("card declined".into());
        assert_eq!(declined.to_string(), "payment initialization failed: card declined");
        assert!(declined.is_gateway());

        let illegal = PaymentError::IllegalTransition {
            from: PaymentStatus::Succeeded,
            to: PaymentStatus::Processing,
        };
        assert_eq!(illegal.to_string(), "illegal payment transition: succeeded -> processing");
        assert!(illegal.is_illegal_transition());
        assert!(!illegal.is_gateway());
    }
}
