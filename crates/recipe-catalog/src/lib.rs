//! Recipe Catalog
//!
//! Client-side derived state for the recipe grid.
//!
//! # Overview
//!
//! - **RecipeStore**: the mutable source list (likes, bookmarks, ratings, new recipes)
//! - **FilterState**: category / cuisine / prep-time / premium / search predicates, AND-combined
//! - **Pagination**: 1-based pages over the visible set
//! - **Catalog**: all three, with the visible set recomputed on every change
//!
//! # Example
//!
//! ```rust
//! use recipe_catalog::{Catalog, PrepTimeBucket};
//! use recipe_model::{Recipe, RecipeId};
//!
//! let recipes = vec![
//!     Recipe::new(RecipeId::new("1"), "Carbonara", "Eggs and pancetta", 30, "Italian", "Dinner"),
//!     Recipe::new(RecipeId::new("2"), "Salad", "Cucumbers and feta", 15, "Mediterranean", "Lunch"),
//! ];
//!
//! let mut catalog = Catalog::new(recipes, 6);
//! catalog.set_prep_time(PrepTimeBucket::From15To30);
//! catalog.search("FETA");
//!
//! let titles: Vec<&str> = catalog.visible().map(|r| r.title.as_str()).collect();
//! assert_eq!(titles, vec!["Salad"]);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod store;

// Re-exports
pub use catalog::Catalog;
pub use error::CatalogError;
pub use filter::{Choice, FilterBadge, FilterState, PrepTimeBucket, ALL, CATEGORY_OPTIONS, CUISINE_OPTIONS};
pub use pagination::{Pagination, DEFAULT_PAGE_SIZE};
pub use store::RecipeStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the catalog
    pub use crate::{Catalog, CatalogError, Choice, FilterState, Pagination, PrepTimeBucket, RecipeStore};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
