//! One checkout attempt
//!
//! A [`PaymentSession`] owns the form and the status, drives the gateway and
//! reports the outcome through [`PaymentEvents`].

use crate::error::PaymentError;
use crate::form::PaymentForm;
use crate::gateway::{PaymentGateway, TransactionRef};
use crate::status::{validate_transition, PaymentStatus};

/// Outcome callbacks
pub trait PaymentEvents {
    fn on_success(&mut self, reference: &TransactionRef);

    fn on_error(&mut self, message: &str);

    fn on_cancel(&mut self);
}

/// Recorded callback, for callers that would rather inspect than react
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentEvent {
    Succeeded(TransactionRef),
    Failed(String),
    Cancelled,
}

impl PaymentEvents for Vec<PaymentEvent> {
    fn on_success(&mut self, reference: &TransactionRef) {
        self.push(PaymentEvent::Succeeded(reference.clone()));
    }

    fn on_error(&mut self, message: &str) {
        self.push(PaymentEvent::Failed(message.to_string()));
    }

    fn on_cancel(&mut self) {
        self.push(PaymentEvent::Cancelled);
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaymentSession {
    pub form: PaymentForm,
    status: PaymentStatus,
    reference: Option<TransactionRef>,
    error: Option<String>,
}

impl PaymentSession {
    #[inline]
    #[must_use]
    pub fn new(form: PaymentForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == PaymentStatus::Processing
    }

    #[inline]
    #[must_use]
    pub fn reference(&self) -> Option<&TransactionRef> {
        self.reference.as_ref()
    }

    /// Message shown above the form after a gateway error
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn transition(&mut self, to: PaymentStatus) -> Result<(), PaymentError> {
        validate_transition(self.status, to)?;
        tracing::debug!(from = %self.status, %to, "payment status");
        self.status = to;
        Ok(())
    }

    /// Charge the form through `gateway`
    ///
    /// The amount goes to the gateway as typed. With [`SimulatedGateway`]
    /// this always ends in `Succeeded` once the delay has elapsed.
    ///
    /// [`SimulatedGateway`]: crate::gateway::SimulatedGateway
    ///
    /// # Errors
    /// - `IllegalTransition` unless the session is `Idle`
    /// - the gateway's error, after moving to `Failed` and reporting through
    ///   `events`
    pub async fn pay<G, E>(&mut self, gateway: &G, events: &mut E) -> Result<TransactionRef, PaymentError>
    where
        G: PaymentGateway + ?Sized,
        E: PaymentEvents + ?Sized,
    {
        self.transition(PaymentStatus::Processing)?;

        let request = self.form.to_request();
        match gateway.initiate(&request).await {
            Ok(reference) => {
                self.transition(PaymentStatus::Succeeded)?;
                tracing::info!(%reference, recipe = ?self.form.recipe_id, "payment succeeded");
                self.reference = Some(reference.clone());
                events.on_success(&reference);
                Ok(reference)
            }
            Err(err) => {
                self.transition(PaymentStatus::Failed)?;
                let message = err.to_string();
                tracing::warn!(error = %message, "payment failed");
                events.on_error(&message);
                self.error = Some(message);
                Err(err)
            }
        }
    }

    /// Abandon the checkout
    ///
    /// # Errors
    /// - `IllegalTransition` while processing or after success
    pub fn cancel<E>(&mut self, events: &mut E) -> Result<(), PaymentError>
    where
        E: PaymentEvents + ?Sized,
    {
        self.transition(PaymentStatus::Cancelled)?;
        events.on_cancel();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::SimulatedGateway;
    use recipe_model::RecipeId;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn pay_waits_then_succeeds() {
        let mut session = PaymentSession::new(PaymentForm::for_recipe(RecipeId::new("2"), "Doro Wat", 349.99));
        let mut events: Vec<PaymentEvent> = Vec::new();
        let start = tokio::time::Instant::now();

        let reference = session.pay(&SimulatedGateway::new(), &mut events).await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_secs(2));
        assert_eq!(session.status(), PaymentStatus::Succeeded);
        assert_eq!(events, vec![PaymentEvent::Succeeded(reference)]);
    }

    #[tokio::test(start_paused = true)]
    async fn typed_amount_is_never_rejected() {
        for typed in ["349,99", "free", "", "-5"] {
            let mut session = PaymentSession::default();
            session.form.amount = typed.into();
            let mut events: Vec<PaymentEvent> = Vec::new();
            let start = tokio::time::Instant::now();

            let reference = session.pay(&SimulatedGateway::new(), &mut events).await.unwrap();

            assert_eq!(start.elapsed(), Duration::from_secs(2));
            assert_eq!(session.status(), PaymentStatus::Succeeded);
            assert!(session.error().is_none());
            assert_eq!(events, vec![PaymentEvent::Succeeded(reference)]);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cannot_pay_twice() {
        let gateway = SimulatedGateway::new().with_delay(Duration::from_millis(10));
        let mut session = PaymentSession::default();
        let mut events: Vec<PaymentEvent> = Vec::new();

        session.pay(&gateway, &mut events).await.unwrap();
        let err = session.pay(&gateway, &mut events).await.unwrap_err();

        assert!(matches!(err, PaymentError::IllegalTransition { .. }));
        assert!(session.cancel(&mut events).is_err());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn cancel_from_idle() {
        let mut session = PaymentSession::default();
        let mut events: Vec<PaymentEvent> = Vec::new();
        session.cancel(&mut events).unwrap();
        assert_eq!(session.status(), PaymentStatus::Cancelled);
        assert_eq!(events, vec![PaymentEvent::Cancelled]);
    }
}
