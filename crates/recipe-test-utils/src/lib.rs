//! Testing utilities for the Recipe Hub workspace
//!
//! Shared fixtures and builders.

#![allow(missing_docs)]

use recipe_model::{Author, Recipe, RecipeDraft, RecipeId};

/// Bare recipe whose title is its id
pub fn recipe(id: &str, prep_time: u32, cuisine: &str, category: &str) -> Recipe {
    Recipe::new(
        RecipeId::new(id),
        id,
        format!("{id} made at home"),
        prep_time,
        cuisine,
        category,
    )
    .with_image(format!("https://images.example.com/{id}.jpg"))
}

/// Nine recipes covering every prep-time boundary, both premium states and
/// repeated cuisines/categories
pub fn fixture_recipes() -> Vec<Recipe> {
    vec![
        recipe("carbonara", 30, "Italian", "Dinner")
            .with_rating(4.5, 10)
            .with_author(Author::new("Chef Maria", "maria.svg"))
            .with_ingredients(["Spaghetti", "Eggs", "Pancetta"])
            .with_instructions(["Boil pasta", "Fry pancetta", "Combine"]),
        recipe("thai-curry", 45, "Thai", "Dinner").premium(Some(299.99)),
        recipe("burger", 25, "American", "Lunch"),
        recipe("doro-wat", 60, "Ethiopian", "Dinner").premium(Some(349.99)),
        recipe("lava-cake", 40, "Dessert", "Dessert").premium(None),
        recipe("salad", 15, "Mediterranean", "Lunch"),
        recipe("toast", 5, "American", "Breakfast"),
        recipe("brisket", 61, "American", "Dinner"),
        recipe("omelette", 14, "French", "Breakfast"),
    ]
}

/// A draft that passes every wizard rule
pub fn valid_draft() -> RecipeDraft {
    RecipeDraft {
        title: "Banana Bread".into(),
        description: "Moist loaf with ripe bananas".into(),
        prep_time: 70,
        cuisine: "American".into(),
        category: "Snacks".into(),
        is_premium: false,
        ingredients: vec!["Bananas".into(), "Flour".into()],
        instructions: vec!["Mash bananas".into(), "Bake for an hour".into()],
        images: vec!["https://images.example.com/banana-bread.jpg".into()],
    }
}
