//! Recipe creation wizard
//!
//! Four stages walked in order, with free movement between them. Nothing is
//! checked until [`RecipeWizard::submit`], which validates the whole form at
//! once and hands back a [`RecipeDraft`].

use crate::validation::{min_chars, ValidationErrors};
use rand::Rng;
use recipe_model::RecipeDraft;
use serde::{Deserialize, Serialize};

pub const CUISINE_OPTIONS: [&str; 7] = [
    "Italian", "Mexican", "Indian", "Chinese", "Ethiopian", "American", "Other",
];

pub const CATEGORY_OPTIONS: [&str; 6] = [
    "Breakfast", "Lunch", "Dinner", "Dessert", "Snacks", "Beverages",
];

pub const DEFAULT_PREP_TIME: u32 = 30;

const MIN_TITLE: usize = 3;
const MIN_DESCRIPTION: usize = 10;

/// Wizard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStage {
    #[default]
    #[serde(rename = "basic")]
    BasicInfo,
    Ingredients,
    Instructions,
    Images,
}

impl WizardStage {
    pub const ALL: [Self; 4] = [
        Self::BasicInfo,
        Self::Ingredients,
        Self::Instructions,
        Self::Images,
    ];

    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::BasicInfo => Some(Self::Ingredients),
            Self::Ingredients => Some(Self::Instructions),
            Self::Instructions => Some(Self::Images),
            Self::Images => None,
        }
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::BasicInfo => None,
            Self::Ingredients => Some(Self::BasicInfo),
            Self::Instructions => Some(Self::Ingredients),
            Self::Images => Some(Self::Instructions),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_first(self) -> bool {
        self.previous().is_none()
    }

    #[inline]
    #[must_use]
    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::Ingredients => "Ingredients",
            Self::Instructions => "Instructions",
            Self::Images => "Images",
        }
    }
}

/// Random stand-in for an uploaded photo
#[must_use]
pub fn placeholder_image() -> String {
    let photo = rand::rng().random_range(0..1000);
    format!("https://images.unsplash.com/photo-{photo}?w=800&q=80")
}

/// Creation wizard state
///
/// Text fields are public and edited directly; list fields go through the
/// add/remove methods so pending inputs are trimmed and cleared consistently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeWizard {
    stage: WizardStage,
    pub title: String,
    pub description: String,
    pub prep_time: u32,
    pub cuisine: String,
    pub category: String,
    pub is_premium: bool,
    pub pending_ingredient: String,
    pub pending_instruction: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    images: Vec<String>,
}

impl Default for RecipeWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeWizard {
    /// Empty wizard on the first stage
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: WizardStage::BasicInfo,
            title: String::new(),
            description: String::new(),
            prep_time: DEFAULT_PREP_TIME,
            cuisine: String::new(),
            category: String::new(),
            is_premium: false,
            pending_ingredient: String::new(),
            pending_instruction: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Wizard seeded with starter ingredients, steps and a cover photo
    #[must_use]
    pub fn prefilled() -> Self {
        Self {
            ingredients: vec!["Flour".into(), "Sugar".into(), "Eggs".into()],
            instructions: vec![
                "Preheat oven to 350°F".into(),
                "Mix dry ingredients".into(),
            ],
            images: vec![
                "https://images.unsplash.com/photo-1546549032-9571cd6b27df?w=800&q=80".into(),
            ],
            ..Self::new()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    // Navigation

    #[inline]
    #[must_use]
    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    /// Advance one stage; stays put on the last
    pub fn next_stage(&mut self) -> WizardStage {
        if let Some(next) = self.stage.next() {
            self.stage = next;
        }
        self.stage
    }

    /// Go back one stage; stays put on the first
    pub fn previous_stage(&mut self) -> WizardStage {
        if let Some(previous) = self.stage.previous() {
            self.stage = previous;
        }
        self.stage
    }

    pub fn go_to(&mut self, stage: WizardStage) {
        self.stage = stage;
    }

    // Basic info

    /// Parse the prep-time input; anything but a whole number reads as 0
    pub fn set_prep_time_input(&mut self, input: &str) {
        self.prep_time = input.trim().parse().unwrap_or(0);
    }

    // Lists

    #[inline]
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    #[inline]
    #[must_use]
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    #[inline]
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Move the pending ingredient into the list
    ///
    /// Returns false when the pending input is blank.
    pub fn add_ingredient(&mut self) -> bool {
        take_pending(&mut self.pending_ingredient, &mut self.ingredients)
    }

    pub fn remove_ingredient(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.ingredients, index)
    }

    /// Move the pending instruction into the list
    ///
    /// Returns false when the pending input is blank.
    pub fn add_instruction(&mut self) -> bool {
        take_pending(&mut self.pending_instruction, &mut self.instructions)
    }

    pub fn remove_instruction(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.instructions, index)
    }

    /// Simulated upload: appends a placeholder photo and returns its URL
    pub fn upload_image(&mut self) -> &str {
        self.images.push(placeholder_image());
        tracing::debug!(count = self.images.len(), "placeholder image added");
        self.images.last().map_or("", String::as_str)
    }

    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.images, index)
    }

    // Submission

    /// Check every rule, collecting all failures
    ///
    /// # Errors
    /// Fields: `title`, `description`, `ingredients`, `instructions`,
    /// `prep_time`, `cuisine`, `category`, `images`
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            min_chars(&self.title, MIN_TITLE),
            "title",
            "Title must be at least 3 characters",
        );
        errors.check(
            min_chars(&self.description, MIN_DESCRIPTION),
            "description",
            "Description must be at least 10 characters",
        );
        errors.check(
            !self.ingredients.is_empty(),
            "ingredients",
            "Add at least one ingredient",
        );
        errors.check(
            !self.instructions.is_empty(),
            "instructions",
            "Add at least one instruction",
        );
        errors.check(self.prep_time > 0, "prep_time", "Preparation time is required");
        errors.check(!self.cuisine.is_empty(), "cuisine", "Cuisine is required");
        errors.check(!self.category.is_empty(), "category", "Category is required");
        errors.check(!self.images.is_empty(), "images", "Add at least one image");
        errors.into_result(())
    }

    /// Validate and assemble the draft; the wizard itself is left untouched
    ///
    /// # Errors
    /// Every failing field, see [`RecipeWizard::validate`]
    pub fn submit(&self) -> Result<RecipeDraft, ValidationErrors> {
        if let Err(errors) = self.validate() {
            tracing::debug!(failed = errors.len(), "recipe draft rejected");
            return Err(errors);
        }

        Ok(RecipeDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            prep_time: self.prep_time,
            cuisine: self.cuisine.clone(),
            category: self.category.clone(),
            is_premium: self.is_premium,
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            images: self.images.clone(),
        })
    }
}

fn take_pending(pending: &mut String, list: &mut Vec<String>) -> bool {
    let value = pending.trim();
    if value.is_empty() {
        return false;
    }
    list.push(value.to_string());
    pending.clear();
    true
}

fn remove_at(list: &mut Vec<String>, index: usize) -> Option<String> {
    (index < list.len()).then(|| list.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete() -> RecipeWizard {
        RecipeWizard::prefilled()
            .with_title("Injera")
            .with_description("Sourdough flatbread made from teff")
            .with_cuisine("Ethiopian")
            .with_category("Breakfast")
    }

    #[test]
    fn navigation_is_linear_and_saturates() {
        let mut wizard = RecipeWizard::new();
        assert_eq!(wizard.previous_stage(), WizardStage::BasicInfo);
        assert_eq!(wizard.next_stage(), WizardStage::Ingredients);
        assert_eq!(wizard.next_stage(), WizardStage::Instructions);
        assert_eq!(wizard.next_stage(), WizardStage::Images);
        assert_eq!(wizard.next_stage(), WizardStage::Images);
        assert!(wizard.stage().is_last());

        wizard.go_to(WizardStage::Ingredients);
        assert_eq!(wizard.previous_stage(), WizardStage::BasicInfo);
    }

    #[test]
    fn pending_input_is_trimmed_and_cleared() {
        let mut wizard = RecipeWizard::new();
        wizard.pending_ingredient = "  Teff flour ".into();
        assert!(wizard.add_ingredient());
        assert_eq!(wizard.ingredients(), ["Teff flour"]);
        assert!(wizard.pending_ingredient.is_empty());

        wizard.pending_instruction = "   ".into();
        assert!(!wizard.add_instruction());
        assert!(wizard.instructions().is_empty());
        assert_eq!(wizard.pending_instruction, "   ");
    }

    #[test]
    fn removal_by_index() {
        let mut wizard = RecipeWizard::prefilled();
        assert_eq!(wizard.remove_ingredient(1), Some("Sugar".into()));
        assert_eq!(wizard.ingredients(), ["Flour", "Eggs"]);
        assert_eq!(wizard.remove_ingredient(9), None);
        assert_eq!(wizard.remove_image(0).map(|_| ()), Some(()));
        assert!(wizard.images().is_empty());
    }

    #[test]
    fn upload_appends_placeholder() {
        let mut wizard = RecipeWizard::new();
        let url = wizard.upload_image().to_string();
        assert!(url.starts_with("https://images.unsplash.com/photo-"));
        assert!(url.ends_with("?w=800&q=80"));
        assert_eq!(wizard.images().len(), 1);
    }

    #[test]
    fn prep_time_input_parses_or_zeroes() {
        let mut wizard = RecipeWizard::new();
        assert_eq!(wizard.prep_time, DEFAULT_PREP_TIME);
        wizard.set_prep_time_input(" 45 ");
        assert_eq!(wizard.prep_time, 45);
        wizard.set_prep_time_input("soon");
        assert_eq!(wizard.prep_time, 0);
    }

    #[test]
    fn empty_wizard_reports_every_failure() {
        let mut wizard = RecipeWizard::new();
        wizard.prep_time = 0;
        let errors = wizard.submit().unwrap_err();
        assert_eq!(errors.len(), 8);
        assert_eq!(errors.message("images"), Some("Add at least one image"));
        assert_eq!(errors.message("prep_time"), Some("Preparation time is required"));
    }

    #[test]
    fn submit_assembles_draft() {
        let draft = complete().submit().unwrap();
        assert_eq!(draft.title, "Injera");
        assert_eq!(draft.prep_time, DEFAULT_PREP_TIME);
        assert_eq!(draft.ingredients, vec!["Flour", "Sugar", "Eggs"]);
        assert_eq!(draft.instructions.len(), 2);
        assert_eq!(draft.images.len(), 1);
        assert!(!draft.is_premium);
    }

    #[test]
    fn options_match_filter_spelling() {
        assert!(CUISINE_OPTIONS.contains(&"Italian"));
        assert!(CATEGORY_OPTIONS.contains(&"Dinner"));
        assert_eq!(WizardStage::BasicInfo.label(), "Basic Info");
    }
}
