//! Payment gateway seam
//!
//! [`SimulatedGateway`] stands in for a hosted checkout: it waits, then
//! approves every request with a fabricated reference.

use crate::error::PaymentError;
use crate::form::PaymentRequest;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

const REFERENCE_SUFFIX_RANGE: u32 = 1_000_000;

/// Transaction reference, `TX-<unix millis>-<suffix>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionRef(String);

impl TransactionRef {
    #[must_use]
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let suffix = rand::rng().random_range(0..REFERENCE_SUFFIX_RANGE);
        Self(format!("TX-{millis}-{suffix}"))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Charges a request
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// # Errors
    /// Gateway-specific; the simulated gateway never fails
    async fn initiate(&self, request: &PaymentRequest) -> Result<TransactionRef, PaymentError>;
}

/// Fixed-delay gateway that approves everything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedGateway {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { delay: DEFAULT_DELAY }
    }

    #[inline]
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait::async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn initiate(&self, request: &PaymentRequest) -> Result<TransactionRef, PaymentError> {
        tracing::debug!(amount = %request.amount, currency = %request.currency, "simulating checkout");
        tokio::time::sleep(self.delay).await;
        Ok(TransactionRef::generate())
    }
}
