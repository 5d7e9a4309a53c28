//! Recipe Forms
//!
//! Schema-validated input for the Recipe Hub: the login / signup modal and the
//! four-stage recipe creation wizard. Forms never talk to a backend; a valid
//! submission is returned to the caller.
//!
//! # Example
//!
//! ```rust
//! use recipe_forms::{RecipeWizard, WizardStage};
//!
//! let mut wizard = RecipeWizard::new()
//!     .with_title("Misir Wot")
//!     .with_description("Spicy red lentil stew")
//!     .with_cuisine("Ethiopian")
//!     .with_category("Dinner");
//!
//! // Nothing is checked while moving between stages
//! assert_eq!(wizard.next_stage(), WizardStage::Ingredients);
//!
//! let errors = wizard.submit().unwrap_err();
//! assert_eq!(errors.message("ingredients"), Some("Add at least one ingredient"));
//!
//! wizard.pending_ingredient = "Red lentils".into();
//! wizard.add_ingredient();
//! wizard.pending_instruction = "Simmer with berbere".into();
//! wizard.add_instruction();
//! wizard.upload_image();
//!
//! let draft = wizard.submit().unwrap();
//! assert_eq!(draft.ingredients, vec!["Red lentils"]);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod auth;
pub mod validation;
pub mod wizard;

// Re-exports
pub use auth::{AuthModal, AuthSubmission, AuthTab, LoginForm, SignupForm, SocialProvider};
pub use validation::{FieldError, ValidationErrors};
pub use wizard::{RecipeWizard, WizardStage, CATEGORY_OPTIONS, CUISINE_OPTIONS};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with forms
    pub use crate::{AuthModal, AuthTab, RecipeWizard, ValidationErrors, WizardStage};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
