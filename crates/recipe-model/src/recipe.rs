//! Recipe records
//!
//! A [`Recipe`] is never deleted; likes, bookmarks and ratings mutate it in place.

use crate::ids::RecipeId;
use serde::{Deserialize, Serialize};

/// Highest star value a user can give
pub const MAX_STARS: u8 = 5;

/// Rating errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    /// Stars outside 1..=5
    #[error("rating must be between 1 and {MAX_STARS} stars, got {0}")]
    OutOfRange(u8),
}

/// Recipe author shown on cards and in the detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

impl Author {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}

/// One numbered instruction step (numbering starts at 1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub step: u32,
    pub description: String,
}

impl Instruction {
    /// Number a list of step descriptions from 1
    #[must_use]
    pub fn numbered<I, S>(steps: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        steps
            .into_iter()
            .zip(1u32..)
            .map(|(description, step)| Self {
                step,
                description: description.into(),
            })
            .collect()
    }
}

/// A recipe card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Preparation time in minutes
    pub prep_time: u32,
    pub cuisine: String,
    pub category: String,
    /// Displayed average, 0.0 when nobody has rated yet
    pub rating: f64,
    #[serde(default)]
    pub rating_count: u32,
    /// The current user's own stars, folded into `rating`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_rating: Option<u8>,
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<Instruction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl Recipe {
    /// Create an unrated, free recipe
    #[must_use]
    pub fn new(
        id: RecipeId,
        title: impl Into<String>,
        description: impl Into<String>,
        prep_time: u32,
        cuisine: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            image: String::new(),
            prep_time,
            cuisine: cuisine.into(),
            category: category.into(),
            rating: 0.0,
            rating_count: 0,
            user_rating: None,
            is_premium: false,
            price: None,
            is_liked: false,
            is_bookmarked: false,
            ingredients: None,
            instructions: None,
            author: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Seed an existing average from `count` ratings
    #[inline]
    #[must_use]
    pub fn with_rating(mut self, rating: f64, count: u32) -> Self {
        self.rating = rating;
        self.rating_count = count;
        self
    }

    /// Mark as premium, optionally with an explicit price
    #[inline]
    #[must_use]
    pub fn premium(mut self, price: Option<f64>) -> Self {
        self.is_premium = true;
        self.price = price;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = Some(ingredients.into_iter().map(Into::into).collect());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_instructions<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = Some(Instruction::numbered(steps));
        self
    }

    /// Flip the liked flag, returning the new value
    #[inline]
    pub fn toggle_like(&mut self) -> bool {
        self.is_liked = !self.is_liked;
        self.is_liked
    }

    /// Flip the bookmarked flag, returning the new value
    #[inline]
    pub fn toggle_bookmark(&mut self) -> bool {
        self.is_bookmarked = !self.is_bookmarked;
        self.is_bookmarked
    }

    /// Fold the user's stars into the average
    ///
    /// Rating again replaces the user's previous contribution instead of
    /// counting twice.
    ///
    /// # Errors
    /// - `RatingError::OutOfRange` unless `1 <= stars <= 5`
    pub fn rate(&mut self, stars: u8) -> Result<f64, RatingError> {
        if stars == 0 || stars > MAX_STARS {
            return Err(RatingError::OutOfRange(stars));
        }

        let mut total = self.rating * f64::from(self.rating_count);
        match self.user_rating {
            Some(previous) => total -= f64::from(previous),
            None => self.rating_count += 1,
        }
        total += f64::from(stars);

        self.user_rating = Some(stars);
        self.rating = total / f64::from(self.rating_count);
        Ok(self.rating)
    }

    /// Price to charge, falling back to `default` when unset or not above zero
    #[inline]
    #[must_use]
    pub fn price_or(&self, default: f64) -> f64 {
        self.price.filter(|p| *p > 0.0).unwrap_or(default)
    }

    /// Ingredient names, empty when none were recorded
    #[inline]
    #[must_use]
    pub fn ingredient_list(&self) -> &[String] {
        self.ingredients.as_deref().unwrap_or_default()
    }

    /// Instruction steps, empty when none were recorded
    #[inline]
    #[must_use]
    pub fn instruction_list(&self) -> &[Instruction] {
        self.instructions.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Recipe {
        Recipe::new(RecipeId::new("1"), "Carbonara", "Eggs and pancetta", 30, "Italian", "Dinner")
    }

    #[test]
    fn toggle_twice_restores_flags() {
        let mut recipe = sample();
        assert!(recipe.toggle_like());
        assert!(!recipe.toggle_like());
        assert!(recipe.toggle_bookmark());
        assert!(!recipe.toggle_bookmark());
        assert!(!recipe.is_liked);
        assert!(!recipe.is_bookmarked);
    }

    #[test]
    fn first_rating_on_unrated_recipe_is_exact() {
        let mut recipe = sample();
        assert_eq!(recipe.rate(4).unwrap(), 4.0);
        assert_eq!(recipe.rating_count, 1);
    }

    #[test]
    fn rerating_replaces_previous_stars() {
        let mut recipe = sample().with_rating(4.0, 1);
        assert_eq!(recipe.rate(5).unwrap(), 4.5);
        assert_eq!(recipe.rating_count, 2);

        assert_eq!(recipe.rate(3).unwrap(), 3.5);
        assert_eq!(recipe.rating_count, 2);
        assert_eq!(recipe.user_rating, Some(3));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let mut recipe = sample();
        assert_eq!(recipe.rate(0), Err(RatingError::OutOfRange(0)));
        assert_eq!(recipe.rate(6), Err(RatingError::OutOfRange(6)));
        assert_eq!(recipe.rating_count, 0);
    }

    #[test]
    fn instructions_are_numbered_from_one() {
        let steps = Instruction::numbered(["Boil", "Fry", "Mix"]);
        let numbers: Vec<u32> = steps.iter().map(|s| s.step).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn serializes_with_camel_case_flags() {
        let recipe = sample().premium(Some(299.99));
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["prepTime"], 30);
        assert_eq!(json["isPremium"], true);
        assert_eq!(json["price"], 299.99);
        assert!(json.get("author").is_none());
    }

    #[test]
    fn price_falls_back_to_default() {
        assert_eq!(sample().price_or(299.99), 299.99);
        assert_eq!(sample().premium(Some(10.0)).price_or(299.99), 10.0);
    }

    #[test]
    fn zero_price_falls_back_to_default() {
        assert_eq!(sample().premium(Some(0.0)).price_or(299.99), 299.99);
        assert_eq!(sample().premium(Some(-4.0)).price_or(299.99), 299.99);
    }
}
