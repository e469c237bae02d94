// ABOUTME: Template-based recipe suggestion from a list of ingredients
// ABOUTME: Classifies ingredients against fixed vocabularies and renders a seven-step recipe card
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::simplify::capitalize_first;
use crate::errors::{AppError, AppResult};

const PROTEIN_TERMS: &[&str] = &[
    "chicken", "paneer", "tofu", "fish", "beef", "pork", "egg", "shrimp",
];

const VEGETABLE_TERMS: &[&str] = &[
    "tomato", "onion", "carrot", "broccoli", "pepper", "spinach", "potato", "garlic",
];

const PASTA_TERMS: &[&str] = &["pasta", "noodles", "spaghetti"];

/// Proteins that can name a rice bowl, in preference order of appearance
const BOWL_PROTEIN_TERMS: &[&str] = &["chicken", "paneer", "shrimp"];

/// What kind of ingredients are on hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Classification {
    /// At least one protein term
    pub has_protein: bool,
    /// At least one vegetable term
    pub has_vegetables: bool,
    /// Some ingredient mentions rice
    pub has_rice: bool,
    /// At least one pasta or noodle term
    pub has_pasta: bool,
}

impl Classification {
    /// Classify ingredient names (case-insensitive, exact term match except rice)
    #[must_use]
    pub fn of(ingredients: &[String]) -> Self {
        let lowered: Vec<String> = ingredients.iter().map(|i| i.to_lowercase()).collect();
        let any_in = |terms: &[&str]| lowered.iter().any(|i| terms.contains(&i.as_str()));

        Self {
            has_protein: any_in(PROTEIN_TERMS),
            has_vegetables: any_in(VEGETABLE_TERMS),
            has_rice: lowered.iter().any(|i| i.contains("rice")),
            has_pasta: any_in(PASTA_TERMS),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum DishName {
    /// "<Protein> Rice Bowl"
    ProteinRiceBowl,
    /// "Pasta with Protein" or "Vegetable Pasta"
    Pasta,
    /// "<First ingredient> Stir Fry"
    StirFry,
    Fixed(&'static str),
}

struct DishRule {
    applies: fn(&Classification) -> bool,
    name: DishName,
    total_time: &'static str,
}

/// First match wins; the last rule always applies
const DISH_RULES: &[DishRule] = &[
    DishRule {
        applies: |c| c.has_rice && c.has_protein,
        name: DishName::ProteinRiceBowl,
        total_time: "30-35 minutes",
    },
    DishRule {
        applies: |c| c.has_pasta,
        name: DishName::Pasta,
        total_time: "20-25 minutes",
    },
    DishRule {
        applies: |c| c.has_protein && c.has_vegetables,
        name: DishName::StirFry,
        total_time: "25-30 minutes",
    },
    DishRule {
        applies: |_| true,
        name: DishName::Fixed("Mixed Dish"),
        total_time: "25-30 minutes",
    },
];

/// A fallback recipe suggestion, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Dish name
    pub name: String,
    /// Estimated total time, e.g. "30-35 minutes"
    pub total_time: &'static str,
    /// Ingredients as supplied (trimmed)
    pub ingredients: Vec<String>,
    /// Ingredient classification driving the template branches
    pub classification: Classification,
}

impl Suggestion {
    /// Pick a dish for the ingredients
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_INPUT` error when no non-blank ingredient is given
    pub fn for_ingredients(ingredients: &[String]) -> AppResult<Self> {
        let ingredients = normalize_ingredient_names(ingredients)?;
        let classification = Classification::of(&ingredients);

        let rule = DISH_RULES
            .iter()
            .find(|rule| (rule.applies)(&classification))
            .ok_or_else(|| AppError::internal("No dish rule matched"))?;

        let name = match rule.name {
            DishName::ProteinRiceBowl => {
                let protein = ingredients
                    .iter()
                    .find(|i| BOWL_PROTEIN_TERMS.contains(&i.to_lowercase().as_str()))
                    .map_or_else(|| "Protein".to_owned(), |p| capitalize_first(p));
                format!("{protein} Rice Bowl")
            }
            DishName::Pasta if classification.has_protein => "Pasta with Protein".to_owned(),
            DishName::Pasta => "Vegetable Pasta".to_owned(),
            DishName::StirFry => format!(
                "{} Stir Fry",
                ingredients.first().map(|i| capitalize_first(i)).unwrap_or_default()
            ),
            DishName::Fixed(name) => name.to_owned(),
        };

        Ok(Self {
            name,
            total_time: rule.total_time,
            ingredients,
            classification,
        })
    }

    /// Render the recipe card
    #[must_use]
    pub fn render(&self) -> String {
        let bullets = self
            .ingredients
            .iter()
            .map(|ingredient| format!("• {ingredient}"))
            .collect::<Vec<_>>()
            .join("\n");

        let main_step = if self.classification.has_protein {
            "Season and cook the protein until golden brown (5-7 minutes)."
        } else {
            "Start with aromatics like garlic and ginger (1 minute)."
        };

        let combine_step = if self.classification.has_rice {
            "Mix with cooked rice and toss well."
        } else if self.classification.has_pasta {
            "Toss with cooked pasta."
        } else {
            "Mix everything together."
        };

        format!(
            "🍳 Recipe Suggestion: {name}

📝 Ingredients:
{bullets}

👨‍🍳 Cooking Instructions:

1. Prep Work: Wash and chop all ingredients into bite-sized pieces.

2. Heat Oil: Heat 2 tablespoons of oil in a pan or wok over medium-high heat.

3. Cook Main Ingredient: {main_step}

4. Add Vegetables: Add your vegetables and stir-fry for 4-5 minutes until tender-crisp.

5. Season: Add salt, pepper, and your favorite spices (cumin, coriander, or soy sauce work well).

6. Combine: {combine_step}

7. Finish: Garnish with fresh herbs and serve hot.

⏱️ Total Time: {total_time}
👥 Serves: 2-3 people
🌶️ Spice Level: Adjustable to taste

💡 Pro Tip: Don't overcook vegetables - they should retain some crunch for better texture and nutrition!",
            name = self.name,
            total_time = self.total_time,
        )
    }
}

/// Build and render a suggestion in one step
///
/// # Errors
///
/// Returns an `INVALID_INPUT` error when no non-blank ingredient is given
pub fn suggest_recipe(ingredients: &[String]) -> AppResult<String> {
    Suggestion::for_ingredients(ingredients).map(|s| s.render())
}

/// Trim names and drop blanks
///
/// # Errors
///
/// Returns an `INVALID_INPUT` error when nothing remains
pub fn normalize_ingredient_names(ingredients: &[String]) -> AppResult<Vec<String>> {
    let names: Vec<String> = ingredients
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .map(str::to_owned)
        .collect();

    if names.is_empty() {
        return Err(AppError::invalid_input(
            "ingredients must contain at least one entry",
        ));
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_rice_and_protein_make_a_bowl() {
        let suggestion = Suggestion::for_ingredients(&names(&["chicken", "rice"])).unwrap();

        assert!(suggestion.name.ends_with("Rice Bowl"));
        assert_eq!(suggestion.name, "Chicken Rice Bowl");
        assert_eq!(suggestion.total_time, "30-35 minutes");
    }

    #[test]
    fn test_bowl_without_named_protein() {
        let suggestion = Suggestion::for_ingredients(&names(&["tofu", "brown rice"])).unwrap();
        assert_eq!(suggestion.name, "Protein Rice Bowl");
    }

    #[test]
    fn test_bowl_uses_first_named_protein() {
        let suggestion =
            Suggestion::for_ingredients(&names(&["rice", "Shrimp", "chicken"])).unwrap();
        assert_eq!(suggestion.name, "Shrimp Rice Bowl");
    }

    #[test]
    fn test_pasta_without_protein_is_vegetable_pasta() {
        let suggestion = Suggestion::for_ingredients(&names(&["pasta", "tomato"])).unwrap();

        assert_eq!(suggestion.name, "Vegetable Pasta");
        assert_eq!(suggestion.total_time, "20-25 minutes");
    }

    #[test]
    fn test_pasta_with_protein() {
        let suggestion = Suggestion::for_ingredients(&names(&["spaghetti", "egg"])).unwrap();
        assert_eq!(suggestion.name, "Pasta with Protein");
    }

    #[test]
    fn test_protein_and_vegetables_stir_fry() {
        let suggestion = Suggestion::for_ingredients(&names(&["broccoli", "beef"])).unwrap();

        assert_eq!(suggestion.name, "Broccoli Stir Fry");
        assert_eq!(suggestion.total_time, "25-30 minutes");
    }

    #[test]
    fn test_unclassified_is_mixed_dish() {
        let suggestion = Suggestion::for_ingredients(&names(&["apple", "honey"])).unwrap();
        assert_eq!(suggestion.name, "Mixed Dish");
    }

    #[test]
    fn test_membership_is_case_insensitive_on_trimmed_names() {
        let classification = Classification::of(&names(&["Chicken", "ONION"]));
        assert!(classification.has_protein);
        assert!(classification.has_vegetables);

        let suggestion = Suggestion::for_ingredients(&names(&["  Paneer ", "Basmati Rice"])).unwrap();
        assert_eq!(suggestion.name, "Paneer Rice Bowl");
    }

    #[test]
    fn test_empty_ingredients_rejected() {
        let err = suggest_recipe(&[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        assert!(suggest_recipe(&names(&[" ", ""])).is_err());
    }

    #[test]
    fn test_render_contains_template_sections() {
        let rendered = suggest_recipe(&names(&["chicken", "rice"])).unwrap();

        assert!(rendered.starts_with("🍳 Recipe Suggestion: Chicken Rice Bowl\n\n📝 Ingredients:\n• chicken\n• rice\n"));
        assert!(rendered.contains("3. Cook Main Ingredient: Season and cook the protein"));
        assert!(rendered.contains("6. Combine: Mix with cooked rice and toss well."));
        assert!(rendered.contains("⏱️ Total Time: 30-35 minutes"));
        assert!(rendered.contains("👥 Serves: 2-3 people"));
        assert!(rendered.ends_with("better texture and nutrition!"));
    }

    #[test]
    fn test_render_branches_without_protein() {
        let rendered = suggest_recipe(&names(&["pasta", "tomato"])).unwrap();

        assert!(rendered.contains("Start with aromatics like garlic and ginger (1 minute)."));
        assert!(rendered.contains("6. Combine: Toss with cooked pasta."));

        let mixed = suggest_recipe(&names(&["apple"])).unwrap();
        assert!(mixed.contains("6. Combine: Mix everything together."));
    }
}
