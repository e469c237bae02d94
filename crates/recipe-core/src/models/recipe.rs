// ABOUTME: Recipe entity with difficulty enum and create/update request validation
// ABOUTME: Defines the camelCase JSON shape shared by the store and the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// How hard a recipe is to cook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "PascalCase")]
pub enum Difficulty {
    /// Beginner friendly
    Easy,
    /// Some technique required
    Medium,
    /// Long or technique-heavy
    Hard,
}

impl Difficulty {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Parse a difficulty label, ignoring case and surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_INPUT` error for labels other than easy, medium or hard
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(AppError::invalid_input(format!(
                "Unknown difficulty '{other}', expected Easy, Medium or Hard"
            ))),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Store-assigned identifier
    pub id: Uuid,
    /// Dish name
    pub name: String,
    /// Cuisine label, e.g. "Indian"
    pub cuisine: String,
    /// Ingredients in the order the author listed them
    pub ingredients: Vec<String>,
    /// Free-text cooking instructions, often "Step N:" numbered
    pub instructions: String,
    /// Preparation time in minutes
    pub prep_time_minutes: u32,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Whether the dish is vegetarian
    pub is_vegetarian: bool,
    /// Free-form tags, unique per recipe
    pub tags: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Build a new record from an already validated draft
    #[must_use]
    pub fn from_draft(draft: RecipeDraft, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            cuisine: draft.cuisine,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            prep_time_minutes: draft.prep_time_minutes,
            difficulty: draft.difficulty,
            is_vegetarian: draft.is_vegetarian,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request body for creating a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    /// Dish name
    pub name: String,
    /// Cuisine label
    pub cuisine: String,
    /// Ingredients, at least one
    pub ingredients: Vec<String>,
    /// Cooking instructions
    pub instructions: String,
    /// Preparation time in minutes
    pub prep_time_minutes: u32,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Vegetarian flag (defaults to false)
    #[serde(default)]
    pub is_vegetarian: bool,
    /// Tags (defaults to none)
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RecipeDraft {
    /// Trim text fields, normalize lists and reject blank required values
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_INPUT` error when a required text field is blank or
    /// no non-blank ingredient remains
    pub fn validate(self) -> AppResult<Self> {
        Ok(Self {
            name: required_text("name", &self.name)?,
            cuisine: required_text("cuisine", &self.cuisine)?,
            ingredients: normalize_ingredients(self.ingredients)?,
            instructions: required_text("instructions", &self.instructions)?,
            prep_time_minutes: self.prep_time_minutes,
            difficulty: self.difficulty,
            is_vegetarian: self.is_vegetarian,
            tags: normalize_tags(self.tags),
        })
    }
}

/// Request body for a partial recipe update
///
/// Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePatch {
    /// New name
    pub name: Option<String>,
    /// New cuisine
    pub cuisine: Option<String>,
    /// Replacement ingredient list
    pub ingredients: Option<Vec<String>>,
    /// New instructions
    pub instructions: Option<String>,
    /// New preparation time
    pub prep_time_minutes: Option<u32>,
    /// New difficulty
    pub difficulty: Option<Difficulty>,
    /// New vegetarian flag
    pub is_vegetarian: Option<bool>,
    /// Replacement tag list
    pub tags: Option<Vec<String>>,
}

impl RecipePatch {
    /// Apply the supplied fields to `recipe`, validating each like on create
    ///
    /// The recipe is left untouched when any field fails validation.
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_INPUT` error when a supplied field is invalid
    pub fn apply(self, recipe: &mut Recipe, now: DateTime<Utc>) -> AppResult<()> {
        let name = self.name.map(|v| required_text("name", &v)).transpose()?;
        let cuisine = self
            .cuisine
            .map(|v| required_text("cuisine", &v))
            .transpose()?;
        let instructions = self
            .instructions
            .map(|v| required_text("instructions", &v))
            .transpose()?;
        let ingredients = self.ingredients.map(normalize_ingredients).transpose()?;

        if let Some(name) = name {
            recipe.name = name;
        }
        if let Some(cuisine) = cuisine {
            recipe.cuisine = cuisine;
        }
        if let Some(instructions) = instructions {
            recipe.instructions = instructions;
        }
        if let Some(ingredients) = ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(minutes) = self.prep_time_minutes {
            recipe.prep_time_minutes = minutes;
        }
        if let Some(difficulty) = self.difficulty {
            recipe.difficulty = difficulty;
        }
        if let Some(is_vegetarian) = self.is_vegetarian {
            recipe.is_vegetarian = is_vegetarian;
        }
        if let Some(tags) = self.tags {
            recipe.tags = normalize_tags(tags);
        }
        recipe.updated_at = now;
        Ok(())
    }
}

fn required_text(field: &str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_owned())
}

fn normalize_ingredients(ingredients: Vec<String>) -> AppResult<Vec<String>> {
    let cleaned: Vec<String> = ingredients
        .into_iter()
        .map(|i| i.trim().to_owned())
        .filter(|i| !i.is_empty())
        .collect();

    if cleaned.is_empty() {
        return Err(AppError::invalid_input(
            "ingredients must contain at least one entry",
        ));
    }
    Ok(cleaned)
}

/// Trim tags, drop blanks and duplicates while keeping first-seen order
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !unique.iter().any(|t| t == tag) {
            unique.push(tag.to_owned());
        }
    }
    unique
}
