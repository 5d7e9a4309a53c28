//! Recipe Hub
//!
//! View-model for the whole recipe-sharing page: the filtered and paginated
//! grid, the login / signup modal, the detail view with ratings and comments,
//! the creation wizard and the simulated premium checkout.
//!
//! # Overview
//!
//! - **RecipeHub**: owns all page state; its methods are the page's events
//! - **HubConfig**: page size, checkout delay, currency, default price, display user
//! - **DetailView**: per-opening state of the detail modal
//! - **Header / Footer**: search box, account badge, footer links
//!
//! # Example
//!
//! ```rust
//! use recipe_hub::{ActiveModal, HubConfig, RecipeHub};
//! use recipe_model::RecipeId;
//!
//! let mut hub = RecipeHub::new(HubConfig::default()).unwrap();
//!
//! // Premium recipes ask for a login first
//! hub.recipe_click(&RecipeId::new("2")).unwrap();
//! assert_eq!(hub.active_modal(), Some(ActiveModal::Auth));
//!
//! hub.header_mut().search_input = "curry".into();
//! hub.submit_search();
//! assert_eq!(hub.catalog().visible_count(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod chrome;
pub mod config;
pub mod detail;
pub mod error;
pub mod hub;
pub mod seed;
pub mod toast;

// Re-exports
pub use chrome::{AccountBadge, Footer, FooterLink, Header};
pub use config::{HubConfig, DEFAULT_PREMIUM_PRICE};
pub use detail::{format_price, DetailTab, DetailView};
pub use error::HubError;
pub use hub::{ActiveModal, RecipeHub};
pub use seed::{seed_comments, seed_recipes};
pub use toast::{Toast, Toasts};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the hub
    pub use crate::{ActiveModal, HubConfig, HubError, RecipeHub, Toast};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
