//! Source list of recipes
//!
//! The store owns every recipe the session knows about. Mutations happen in
//! place; nothing is ever removed.

use crate::error::CatalogError;
use recipe_model::{Recipe, RecipeId};

/// In-memory recipe list
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    #[inline]
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    #[inline]
    #[must_use]
    pub fn find(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    /// Look up a recipe or fail with `RecipeNotFound`
    ///
    /// # Errors
    /// - `CatalogError::RecipeNotFound` if no recipe has this id
    pub fn get(&self, id: &RecipeId) -> Result<&Recipe, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::RecipeNotFound(id.clone()))
    }

    fn get_mut(&mut self, id: &RecipeId) -> Result<&mut Recipe, CatalogError> {
        self.recipes
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| CatalogError::RecipeNotFound(id.clone()))
    }

    /// Flip the liked flag, returning the new value
    ///
    /// # Errors
    /// - `CatalogError::RecipeNotFound` if no recipe has this id
    pub fn toggle_like(&mut self, id: &RecipeId) -> Result<bool, CatalogError> {
        Ok(self.get_mut(id)?.toggle_like())
    }

    /// Flip the bookmarked flag, returning the new value
    ///
    /// # Errors
    /// - `CatalogError::RecipeNotFound` if no recipe has this id
    pub fn toggle_bookmark(&mut self, id: &RecipeId) -> Result<bool, CatalogError> {
        Ok(self.get_mut(id)?.toggle_bookmark())
    }

    /// Record the user's stars, returning the new average
    ///
    /// # Errors
    /// - `CatalogError::RecipeNotFound` if no recipe has this id
    /// - `CatalogError::Rating` if `stars` is outside 1..=5
    pub fn rate(&mut self, id: &RecipeId, stars: u8) -> Result<f64, CatalogError> {
        Ok(self.get_mut(id)?.rate(stars)?)
    }

    /// Insert a new recipe at the front of the list
    #[inline]
    pub fn prepend(&mut self, recipe: Recipe) {
        self.recipes.insert(0, recipe);
    }
}
