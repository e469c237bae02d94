// ABOUTME: Sample recipe catalog inserted by the seed-recipes binary
// ABOUTME: Provides a handful of dishes covering every filter and the biryani walkthrough
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sample recipes
//!
//! Seeded with a dedicated CLI tool rather than at server startup:
//!
//! ```bash
//! cargo run --bin seed-recipes
//! cargo run --bin seed-recipes -- --database-url sqlite:./data/recipes.db --force
//! ```

use super::RecipesManager;
use crate::errors::AppResult;
use crate::models::{Difficulty, RecipeDraft};
use tracing::{debug, info};

/// Static sample recipe definition
struct SampleRecipe {
    name: &'static str,
    cuisine: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static str,
    prep_time_minutes: u32,
    difficulty: Difficulty,
    is_vegetarian: bool,
    tags: &'static [&'static str],
}

const SAMPLE_RECIPES: &[SampleRecipe] = &[
    SampleRecipe {
        name: "Chicken Biryani",
        cuisine: "Indian",
        ingredients: &[
            "basmati rice",
            "chicken",
            "yogurt",
            "ginger-garlic paste",
            "red chili powder",
            "turmeric",
            "onions",
            "whole spices",
            "mint leaves",
            "coriander leaves",
            "saffron",
            "milk",
        ],
        instructions: "Step 1: Marinate chicken in yogurt, ginger-garlic paste, red chili powder, turmeric, and salt. Let it sit for at least 1 hour. \
            Step 2: Soak basmati rice in water for 30 minutes. \
            Step 3: In a large pot, heat oil and add whole spices like bay leaves, cinnamon, cardamom, and cloves. \
            Step 4: Add sliced onions and fry until they turn golden brown. \
            Step 5: Remove half the onions for garnish. \
            Step 6: Add the marinated chicken and cook for 5-7 minutes. \
            Step 7: In a separate pot, boil the rice until it is 70% cooked. \
            Step 8: Layer the partially cooked rice over the chicken. \
            Step 9: Top with the reserved fried onions, fresh mint leaves, coriander leaves, and saffron soaked in milk. \
            Step 10: Cover with a tight-fitting lid and cook on low heat for 20-25 minutes. \
            Step 11: Let it rest for 5 minutes before serving. \
            Step 12: Mix gently and serve hot with raita.",
        prep_time_minutes: 90,
        difficulty: Difficulty::Hard,
        is_vegetarian: false,
        tags: &["rice", "festive", "spicy"],
    },
    SampleRecipe {
        name: "Paneer Tikka",
        cuisine: "Indian",
        ingredients: &["paneer", "yogurt", "bell pepper", "onion", "garam masala", "lemon"],
        instructions: "Step 1: Cube the paneer and vegetables. \
            Step 2: Coat everything in spiced yogurt and rest for 20 minutes. \
            Step 3: Thread onto skewers and grill until charred at the edges.",
        prep_time_minutes: 35,
        difficulty: Difficulty::Medium,
        is_vegetarian: true,
        tags: &["grill", "appetizer"],
    },
    SampleRecipe {
        name: "Caprese Salad",
        cuisine: "Italian",
        ingredients: &["tomato", "fresh mozzarella", "basil", "olive oil", "balsamic vinegar"],
        instructions: "Step 1: Slice tomatoes and mozzarella. \
            Step 2: Alternate slices on a plate with basil leaves. \
            Step 3: Drizzle with olive oil and balsamic, then serve.",
        prep_time_minutes: 10,
        difficulty: Difficulty::Easy,
        is_vegetarian: true,
        tags: &["quick", "salad"],
    },
    SampleRecipe {
        name: "Spaghetti Aglio e Olio",
        cuisine: "Italian",
        ingredients: &["spaghetti", "garlic", "olive oil", "chili flakes", "parsley"],
        instructions: "Step 1: Boil the spaghetti in salted water until al dente. \
            Step 2: Meanwhile, gently fry sliced garlic and chili flakes in olive oil. \
            Step 3: Toss the pasta with the oil and parsley and serve hot.",
        prep_time_minutes: 20,
        difficulty: Difficulty::Easy,
        is_vegetarian: true,
        tags: &["quick", "pasta"],
    },
    SampleRecipe {
        name: "Pad Thai",
        cuisine: "Thai",
        ingredients: &["rice noodles", "shrimp", "egg", "bean sprouts", "tamarind paste", "peanuts"],
        instructions: "Step 1: Soak the rice noodles in warm water. \
            Step 2: Stir-fry shrimp, then push aside and scramble the egg. \
            Step 3: Add noodles and tamarind sauce and toss until coated. \
            Step 4: Garnish with peanuts and bean sprouts.",
        prep_time_minutes: 30,
        difficulty: Difficulty::Medium,
        is_vegetarian: false,
        tags: &["noodles", "street-food"],
    },
    SampleRecipe {
        name: "Vegetable Stir Fry",
        cuisine: "Chinese",
        ingredients: &["broccoli", "carrot", "bell pepper", "soy sauce", "garlic", "ginger"],
        instructions: "Step 1: Chop all vegetables into bite-sized pieces. \
            Step 2: Heat oil in a wok and add garlic and ginger. \
            Step 3: Stir-fry the vegetables for 4-5 minutes and season with soy sauce.",
        prep_time_minutes: 15,
        difficulty: Difficulty::Easy,
        is_vegetarian: true,
        tags: &["quick", "healthy"],
    },
];

impl SampleRecipe {
    fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            name: self.name.to_owned(),
            cuisine: self.cuisine.to_owned(),
            ingredients: self.ingredients.iter().map(|&i| i.to_owned()).collect(),
            instructions: self.instructions.to_owned(),
            prep_time_minutes: self.prep_time_minutes,
            difficulty: self.difficulty,
            is_vegetarian: self.is_vegetarian,
            tags: self.tags.iter().map(|&t| t.to_owned()).collect(),
        }
    }
}

/// Sample catalog as insertable drafts
#[must_use]
pub fn sample_recipes() -> Vec<RecipeDraft> {
    SAMPLE_RECIPES.iter().map(SampleRecipe::to_draft).collect()
}

/// Insert the sample catalog, returning the number of recipes created
///
/// Skips seeding when the table already holds recipes, unless `force` is set.
///
/// # Errors
///
/// Returns an error if database operation fails
pub async fn seed_sample_recipes(recipes: &RecipesManager, force: bool) -> AppResult<usize> {
    let existing = recipes.count().await?;
    if existing > 0 && !force {
        info!("Found {existing} existing recipes, skipping seed (use --force to add anyway)");
        return Ok(0);
    }

    let mut created = 0;
    for draft in sample_recipes() {
        let recipe = recipes.create(draft).await?;
        debug!(recipe_id = %recipe.id, "Seeded recipe: {}", recipe.name);
        created += 1;
    }

    info!("Seeded {created} sample recipes");
    Ok(created)
}
