//! Recipe Payment
//!
//! Simulated checkout for premium recipes. A [`PaymentSession`] hands the
//! payer form to a [`PaymentGateway`] and reports the outcome through
//! [`PaymentEvents`]. The bundled [`SimulatedGateway`] sleeps for a fixed
//! delay and approves every request, whatever amount was typed.
//!
//! # Example
//!
//! ```rust
//! use recipe_payment::{PaymentEvent, PaymentForm, PaymentSession, PaymentStatus, SimulatedGateway};
//! use recipe_model::RecipeId;
//! use std::time::Duration;
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .enable_time()
//!     .build()
//!     .unwrap();
//!
//! runtime.block_on(async {
//!     let gateway = SimulatedGateway::new().with_delay(Duration::from_millis(5));
//!     let mut session = PaymentSession::new(PaymentForm::for_recipe(RecipeId::new("2"), "Doro Wat", 349.99));
//!     let mut events: Vec<PaymentEvent> = Vec::new();
//!
//!     let reference = session.pay(&gateway, &mut events).await.unwrap();
//!     assert!(reference.as_str().starts_with("TX-"));
//!     assert_eq!(session.status(), PaymentStatus::Succeeded);
//! });
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod form;
pub mod gateway;
pub mod session;
pub mod status;

// Re-exports
pub use error::PaymentError;
pub use form::{PaymentForm, PaymentRequest};
pub use gateway::{PaymentGateway, SimulatedGateway, TransactionRef, DEFAULT_DELAY};
pub use session::{PaymentEvent, PaymentEvents, PaymentSession};
pub use status::PaymentStatus;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with payments
    pub use crate::{PaymentError, PaymentForm, PaymentGateway, PaymentSession, PaymentStatus, SimulatedGateway};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
