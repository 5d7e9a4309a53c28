//! Submitted creation-wizard content
//!
//! The wizard validates and hands a [`RecipeDraft`] to its caller; turning it
//! into a [`Recipe`] is the caller's decision.

use crate::ids::RecipeId;
use crate::recipe::{Instruction, Recipe};
use crate::user::UserProfile;
use serde::{Deserialize, Serialize};

/// Validated wizard output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub prep_time: u32,
    pub cuisine: String,
    pub category: String,
    pub is_premium: bool,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub images: Vec<String>,
}

impl RecipeDraft {
    /// Assemble a new, unrated recipe authored by `author`
    ///
    /// The first image becomes the card image and instructions are numbered
    /// from 1 in submission order.
    #[must_use]
    pub fn into_recipe(self, id: RecipeId, author: &UserProfile) -> Recipe {
        let image = self.images.into_iter().next().unwrap_or_default();

        Recipe {
            id,
            title: self.title,
            description: self.description,
            image,
            prep_time: self.prep_time,
            cuisine: self.cuisine,
            category: self.category,
            rating: 0.0,
            rating_count: 0,
            user_rating: None,
            is_premium: self.is_premium,
            price: None,
            is_liked: false,
            is_bookmarked: false,
            ingredients: Some(self.ingredients),
            instructions: Some(Instruction::numbered(self.instructions)),
            author: Some(author.as_author()),
        }
    }
}
