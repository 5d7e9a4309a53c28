//! Demo content loaded into a fresh hub

use chrono::{DateTime, Duration, Utc};
use recipe_model::{Author, Comment, CommentId, Recipe, RecipeId};

fn avatar(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

fn chef(name: &str) -> Author {
    let seed = name.rsplit(' ').next().unwrap_or(name);
    Author::new(name, avatar(seed))
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w=800&q=80")
}

/// The six starter recipes
#[must_use]
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            RecipeId::new("1"),
            "Delicious Pasta Carbonara",
            "A classic Italian pasta dish with eggs, cheese, pancetta, and black pepper.",
            30,
            "Italian",
            "Dinner",
        )
        .with_image(unsplash("1546549032-9571cd6b27df"))
        .with_rating(4.5, 128)
        .with_author(chef("Chef Maria"))
        .with_ingredients([
            "Spaghetti",
            "Eggs",
            "Pancetta",
            "Parmesan cheese",
            "Black pepper",
            "Salt",
        ])
        .with_instructions([
            "Boil pasta according to package instructions.",
            "Fry pancetta until crispy.",
            "Mix eggs and cheese in a bowl.",
            "Combine all ingredients and serve.",
        ]),
        Recipe::new(
            RecipeId::new("2"),
            "Spicy Thai Curry",
            "Authentic Thai curry with coconut milk, vegetables, and your choice of protein.",
            45,
            "Thai",
            "Dinner",
        )
        .with_image(unsplash("1455619452474-d2be8b1e70cd"))
        .with_rating(4.8, 96)
        .premium(Some(299.99))
        .with_author(chef("Chef Sombat")),
        Recipe::new(
            RecipeId::new("3"),
            "Classic Beef Burger",
            "Juicy beef patty with lettuce, tomato, cheese, and special sauce on a brioche bun.",
            25,
            "American",
            "Lunch",
        )
        .with_image(unsplash("1568901346375-23c9450c58cd"))
        .with_rating(4.3, 74)
        .with_author(chef("Chef Mike")),
        Recipe::new(
            RecipeId::new("4"),
            "Ethiopian Doro Wat with Injera",
            "Traditional Ethiopian chicken stew served with injera flatbread.",
            60,
            "Ethiopian",
            "Dinner",
        )
        .with_image(unsplash("1512621776951-a57141f2eefd"))
        .with_rating(4.9, 52)
        .premium(Some(349.99))
        .with_author(chef("Chef Abeba")),
        Recipe::new(
            RecipeId::new("5"),
            "Chocolate Lava Cake",
            "Decadent chocolate cake with a molten center, served with vanilla ice cream.",
            40,
            "Dessert",
            "Dessert",
        )
        .with_image(unsplash("1563805042-7684c019e1cb"))
        .with_rating(4.9, 143)
        .premium(Some(249.99))
        .with_author(chef("Chef Pierre")),
        Recipe::new(
            RecipeId::new("6"),
            "Mediterranean Salad",
            "Fresh salad with cucumbers, tomatoes, olives, feta cheese, and olive oil dressing.",
            15,
            "Mediterranean",
            "Lunch",
        )
        .with_image(unsplash("1540420773420-3366772f4999"))
        .with_rating(4.2, 61)
        .with_author(chef("Chef Elena")),
    ]
}

/// The two comments every detail view starts with, dated relative to `now`
#[must_use]
pub fn seed_comments(now: DateTime<Utc>) -> Vec<Comment> {
    vec![
        Comment::new(
            CommentId::new("c1"),
            Author::new("John Doe", avatar("John")),
            "Made this last night and it was amazing! The sauce was perfectly creamy.",
            now - Duration::days(2),
        ),
        Comment::new(
            CommentId::new("c2"),
            Author::new("Sarah Smith", avatar("Sarah")),
            "I added a bit of garlic and it was delicious. Will definitely make again!",
            now - Duration::weeks(1),
        ),
    ]
}
