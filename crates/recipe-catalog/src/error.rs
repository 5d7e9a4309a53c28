//! Error types for the recipe catalog

use recipe_model::{RatingError, RecipeId};

/// Catalog errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// No recipe with this id in the store
    #[error("recipe not found: {0}")]
    RecipeNotFound(RecipeId),

    /// Requested page outside `1..=total`
    #[error("page {page} out of range (1..={total})")]
    PageOutOfRange { page: usize, total: usize },

    /// Unknown prep-time bucket value
    #[error("unknown prep-time bucket: {0}")]
    UnknownPrepTime(String),

    /// Rating rejected
    #[error(transparent)]
    Rating(#[from] RatingError),
}

impl CatalogError {
    /// Check if the error refers to a missing recipe
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecipeNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_display() {
        let err = CatalogError::PageOutOfRange { page: 4, total: 2 };
        assert_eq!(err.to_string(), "page 4 out of range (1..=2)");

        let err = CatalogError::RecipeNotFound(RecipeId::new("9"));
        assert!(err.is_not_found());
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn rating_error_converts() {
        let err: CatalogError = RatingError::OutOfRange(7).into();
        assert!(matches!(err, CatalogError::Rating(RatingError::OutOfRange(7))));
    }
}
