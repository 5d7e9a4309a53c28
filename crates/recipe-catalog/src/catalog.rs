//! Derived grid state
//!
//! [`Catalog`] couples the recipe store with the filter and the pager. The
//! visible set is recomputed in full, synchronously, after every change to
//! either the predicates or the source list, so it always equals the
//! intersection of the active predicates over the whole store.

use crate::error::CatalogError;
use crate::filter::{Choice, FilterBadge, FilterState, PrepTimeBucket};
use crate::pagination::Pagination;
use crate::store::RecipeStore;
use recipe_model::{Recipe, RecipeId};

/// Store + filter + pager with a cached visible set
#[derive(Debug, Clone)]
pub struct Catalog {
    store: RecipeStore,
    filter: FilterState,
    pagination: Pagination,
    /// Indices into the store, in store order
    visible: Vec<usize>,
}

impl Catalog {
    /// Build a catalog showing every recipe
    #[must_use]
    pub fn new(recipes: Vec<Recipe>, page_size: usize) -> Self {
        let mut catalog = Self {
            store: RecipeStore::new(recipes),
            filter: FilterState::default(),
            pagination: Pagination::new(page_size),
            visible: Vec::new(),
        };
        catalog.refresh();
        catalog
    }

    fn refresh(&mut self) {
        self.visible = self
            .store
            .as_slice()
            .iter()
            .enumerate()
            .filter(|(_, recipe)| self.filter.matches(recipe))
            .map(|(i, _)| i)
            .collect();
        self.pagination.clamp(self.visible.len());

        tracing::debug!(
            visible = self.visible.len(),
            total = self.store.len(),
            page = self.pagination.current(),
            "recomputed visible recipes"
        );
    }

    // ---- Reads ----

    #[inline]
    #[must_use]
    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    #[inline]
    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[inline]
    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[inline]
    #[must_use]
    pub fn find(&self, id: &RecipeId) -> Option<&Recipe> {
        self.store.find(id)
    }

    /// Every recipe passing the filter, in store order
    pub fn visible(&self) -> impl Iterator<Item = &Recipe> + '_ {
        let recipes = self.store.as_slice();
        self.visible.iter().map(move |&i| &recipes[i])
    }

    #[inline]
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Whether the grid should render its "no recipes found" state
    #[inline]
    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        self.visible.is_empty()
    }

    /// Recipes on the current page
    #[must_use]
    pub fn current_page(&self) -> Vec<&Recipe> {
        let recipes = self.store.as_slice();
        self.visible[self.pagination.range(self.visible.len())]
            .iter()
            .map(|&i| &recipes[i])
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.visible.len())
    }

    #[inline]
    #[must_use]
    pub fn active_badges(&self) -> Vec<FilterBadge> {
        self.filter.active_badges()
    }

    // ---- Filter changes ----

    pub fn set_category(&mut self, category: impl Into<Choice>) {
        self.filter.category = category.into();
        self.refresh();
    }

    pub fn set_cuisine(&mut self, cuisine: impl Into<Choice>) {
        self.filter.cuisine = cuisine.into();
        self.refresh();
    }

    pub fn set_prep_time(&mut self, bucket: PrepTimeBucket) {
        self.filter.prep_time = bucket;
        self.refresh();
    }

    pub fn set_premium_only(&mut self, premium_only: bool) {
        self.filter.premium_only = premium_only;
        self.refresh();
    }

    /// Replace the search query and go back to page 1
    pub fn search(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.pagination.reset();
        self.refresh();
    }

    /// Replace the whole filter at once
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.refresh();
    }

    // ---- Paging ----

    /// # Errors
    /// - `CatalogError::PageOutOfRange` if `page` is not a valid page
    pub fn go_to_page(&mut self, page: usize) -> Result<(), CatalogError> {
        self.pagination.go_to(page, self.visible.len())
    }

    /// # Errors
    /// - `CatalogError::PageOutOfRange` on the last page
    pub fn next_page(&mut self) -> Result<(), CatalogError> {
        self.go_to_page(self.pagination.current() + 1)
    }

    /// # Errors
    /// - `CatalogError::PageOutOfRange` on page 1
    pub fn previous_page(&mut self) -> Result<(), CatalogError> {
        self.go_to_page(self.pagination.current().saturating_sub(1))
    }

    // ---- Source mutations ----

    /// # Errors
    /// - `CatalogError::RecipeNotFound` if no recipe has this id
    pub fn toggle_like(&mut self, id: &RecipeId) -> Result<bool, CatalogError> {
        let liked = self.store.toggle_like(id)?;
        self.refresh();
        Ok(liked)
    }

    /// # Errors
    /// - `CatalogError::RecipeNotFound` if no recipe has this id
    pub fn toggle_bookmark(&mut self, id: &RecipeId) -> Result<bool, CatalogError> {
        let bookmarked = self.store.toggle_bookmark(id)?;
        self.refresh();
        Ok(bookmarked)
    }

    /// # Errors
    /// - `CatalogError::RecipeNotFound` if no recipe has this id
    /// - `CatalogError::Rating` if `stars` is outside 1..=5
    pub fn rate(&mut self, id: &RecipeId, stars: u8) -> Result<f64, CatalogError> {
        let rating = self.store.rate(id, stars)?;
        self.refresh();
        Ok(rating)
    }

    /// Add a newly created recipe at the front
    pub fn add(&mut self, recipe: Recipe) {
        self.store.prepend(recipe);
        self.refresh();
    }
}
