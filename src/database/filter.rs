// ABOUTME: Recipe list filters parsed from query-string parameters
// ABOUTME: Compiles case-insensitive patterns and validates flag and number parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::Recipe;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;

/// Compiled pattern size cap for client-supplied expressions
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Raw `GET /api/recipes` query parameters
///
/// Every field is optional and empty values are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeQuery {
    /// Pattern matched against the recipe name
    pub search: Option<String>,
    /// Pattern matched against the cuisine
    pub cuisine: Option<String>,
    /// `true` or `false`
    pub is_vegetarian: Option<String>,
    /// Upper bound on preparation minutes, inclusive
    pub max_prep_time: Option<String>,
    /// Comma-separated tags, any of which may match
    pub tags: Option<String>,
    /// Pattern matched against each ingredient
    pub ingredient: Option<String>,
}

/// Validated recipe filter; all supplied criteria must hold
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Name pattern
    pub name: Option<Regex>,
    /// Cuisine pattern
    pub cuisine: Option<Regex>,
    /// Exact vegetarian flag
    pub is_vegetarian: Option<bool>,
    /// Inclusive prep time bound
    pub max_prep_time: Option<u32>,
    /// Accepted tags; empty means no tag filter
    pub tags: Vec<String>,
    /// Ingredient pattern
    pub ingredient: Option<Regex>,
}

impl RecipeFilter {
    /// Validate and compile query parameters
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_FORMAT` error (HTTP 400) for an invalid pattern, a
    /// flag other than `true`/`false`, or a non-integer prep time
    pub fn from_query(query: &RecipeQuery) -> AppResult<Self> {
        Ok(Self {
            name: compile_pattern("search", query.search.as_deref())?,
            cuisine: compile_pattern("cuisine", query.cuisine.as_deref())?,
            is_vegetarian: provided(query.is_vegetarian.as_deref())
                .map(|raw| {
                    raw.parse::<bool>().map_err(|_| {
                        invalid_format(format!(
                            "isVegetarian must be 'true' or 'false', got '{raw}'"
                        ))
                    })
                })
                .transpose()?,
            max_prep_time: provided(query.max_prep_time.as_deref())
                .map(|raw| {
                    raw.parse::<u32>().map_err(|_| {
                        invalid_format(format!(
                            "maxPrepTime must be a non-negative integer, got '{raw}'"
                        ))
                    })
                })
                .transpose()?,
            tags: provided(query.tags.as_deref())
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|tag| !tag.is_empty())
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default(),
            ingredient: compile_pattern("ingredient", query.ingredient.as_deref())?,
        })
    }

    /// Whether a recipe satisfies every supplied criterion
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.name.as_ref().is_none_or(|re| re.is_match(&recipe.name))
            && self
                .cuisine
                .as_ref()
                .is_none_or(|re| re.is_match(&recipe.cuisine))
            && self
                .is_vegetarian
                .is_none_or(|flag| recipe.is_vegetarian == flag)
            && self
                .max_prep_time
                .is_none_or(|max| recipe.prep_time_minutes <= max)
            && (self.tags.is_empty() || recipe.tags.iter().any(|t| self.tags.contains(t)))
            && self
                .ingredient
                .as_ref()
                .is_none_or(|re| recipe.ingredients.iter().any(|i| re.is_match(i)))
    }
}

fn provided(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn compile_pattern(param: &str, value: Option<&str>) -> AppResult<Option<Regex>> {
    provided(value)
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .size_limit(PATTERN_SIZE_LIMIT)
                .build()
                .map_err(|e| invalid_format(format!("Invalid {param} pattern: {e}")))
        })
        .transpose()
}

fn invalid_format(message: String) -> AppError {
    AppError::new(ErrorCode::InvalidFormat, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Recipe};
    use chrono::Utc;
    use uuid::Uuid;

    fn recipe() -> Recipe {
        let now = Utc::now();
        Recipe {
            id: Uuid::new_v4(),
            name: "Chicken Biryani".to_owned(),
            cuisine: "Indian".to_owned(),
            ingredients: vec!["basmati rice".to_owned(), "chicken".to_owned()],
            instructions: "Step 1: Cook.".to_owned(),
            prep_time_minutes: 60,
            difficulty: Difficulty::Hard,
            is_vegetarian: false,
            tags: vec!["rice".to_owned(), "festive".to_owned()],
            created_at: now,
            updated_at: now,
        }
    }

    fn query(pairs: &[(&str, &str)]) -> RecipeQuery {
        let map: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), serde_json::Value::from(*v)))
            .collect();
        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let filter = RecipeFilter::from_query(&query(&[("search", ""), ("tags", " , ")])).unwrap();
        assert!(filter.matches(&recipe()));
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let filter =
            RecipeFilter::from_query(&query(&[("search", "BIRYANI"), ("cuisine", "^ind")]))
                .unwrap();
        assert!(filter.matches(&recipe()));

        let filter = RecipeFilter::from_query(&query(&[("cuisine", "thai")])).unwrap();
        assert!(!filter.matches(&recipe()));
    }

    #[test]
    fn test_ingredient_pattern_matches_any_ingredient() {
        let filter = RecipeFilter::from_query(&query(&[("ingredient", "basmati")])).unwrap();
        assert!(filter.matches(&recipe()));

        let filter = RecipeFilter::from_query(&query(&[("ingredient", "paneer")])).unwrap();
        assert!(!filter.matches(&recipe()));
    }

    #[test]
    fn test_tags_match_any_listed_tag() {
        let filter = RecipeFilter::from_query(&query(&[("tags", "quick, festive")])).unwrap();
        assert_eq!(filter.tags, vec!["quick", "festive"]);
        assert!(filter.matches(&recipe()));

        let filter = RecipeFilter::from_query(&query(&[("tags", "quick")])).unwrap();
        assert!(!filter.matches(&recipe()));
    }

    #[test]
    fn test_prep_time_bound_is_inclusive() {
        let filter = RecipeFilter::from_query(&query(&[("maxPrepTime", "60")])).unwrap();
        assert!(filter.matches(&recipe()));

        let filter = RecipeFilter::from_query(&query(&[("maxPrepTime", "59")])).unwrap();
        assert!(!filter.matches(&recipe()));
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        for pairs in [
            [("search", "(unclosed")],
            [("isVegetarian", "yes")],
            [("maxPrepTime", "-5")],
            [("maxPrepTime", "ten")],
        ] {
            let err = RecipeFilter::from_query(&query(&pairs)).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidFormat);
            assert_eq!(err.http_status(), 400);
        }
    }
}
