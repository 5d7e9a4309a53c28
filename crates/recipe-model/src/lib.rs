//! Recipe Hub Model
//!
//! Records shared by every Recipe Hub view-model.
//!
//! # Core Concepts
//!
//! - [`Recipe`]: a card in the grid, mutated in place by likes, bookmarks and ratings
//! - [`RecipeDraft`]: what the creation wizard hands back to its caller
//! - [`Comment`]: append-only discussion entry, rendered with a relative date
//! - [`UserProfile`]: the client-fabricated display user
//!
//! # Example
//!
//! ```rust
//! use recipe_model::{RecipeDraft, RecipeId, UserProfile};
//!
//! let draft = RecipeDraft {
//!     title: "Shakshuka".into(),
//!     description: "Eggs poached in spiced tomato sauce".into(),
//!     prep_time: 25,
//!     cuisine: "Mediterranean".into(),
//!     category: "Breakfast".into(),
//!     is_premium: false,
//!     ingredients: vec!["Eggs".into(), "Tomatoes".into()],
//!     instructions: vec!["Simmer the sauce".into(), "Crack in the eggs".into()],
//!     images: vec!["https://example.com/shakshuka.jpg".into()],
//! };
//!
//! let recipe = draft.into_recipe(RecipeId::generate(), &UserProfile::default());
//! assert_eq!(recipe.instructions.unwrap()[1].step, 2);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod comment;
mod draft;
mod ids;
mod recipe;
mod user;

pub use comment::{relative_date, Comment};
pub use draft::RecipeDraft;
pub use ids::{CommentId, IdError, RecipeId};
pub use recipe::{Author, Instruction, Recipe, RatingError, MAX_STARS};
pub use user::UserProfile;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with recipe records
    pub use crate::{Author, Comment, Instruction, Recipe, RecipeDraft, RecipeId, UserProfile};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
