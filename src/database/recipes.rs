// ABOUTME: Database operations for recipe records
// ABOUTME: Handles schema creation, CRUD and filtered listing in insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::filter::RecipeFilter;
use crate::errors::{AppError, AppResult};
use crate::models::{Difficulty, Recipe, RecipeDraft, RecipePatch};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

const SELECT_COLUMNS: &str = "id, name, cuisine, ingredients, instructions, prep_time_minutes, \
     difficulty, is_vegetarian, tags, created_at, updated_at";

/// Recipe database operations manager
#[derive(Debug, Clone)]
pub struct RecipesManager {
    pool: SqlitePool,
}

impl RecipesManager {
    /// Create a new recipes manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the recipes table if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                cuisine TEXT NOT NULL,
                ingredients TEXT NOT NULL,
                instructions TEXT NOT NULL,
                prep_time_minutes INTEGER NOT NULL CHECK (prep_time_minutes >= 0),
                difficulty TEXT NOT NULL CHECK (difficulty IN ('Easy', 'Medium', 'Hard')),
                is_vegetarian INTEGER NOT NULL DEFAULT 0,
                tags TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipes table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_recipes_vegetarian_prep ON recipes(is_vegetarian, prep_time_minutes)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipes index: {e}")))?;

        Ok(())
    }

    /// Check that the database answers queries
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")))?;
        Ok(())
    }

    /// Validate and insert a new recipe
    ///
    /// # Errors
    ///
    /// Returns a validation error for invalid drafts, or an error if database
    /// operation fails
    pub async fn create(&self, draft: RecipeDraft) -> AppResult<Recipe> {
        let recipe = Recipe::from_draft(draft.validate()?, Uuid::new_v4(), Utc::now());

        sqlx::query(
            r"
            INSERT INTO recipes (id, name, cuisine, ingredients, instructions, prep_time_minutes,
                                 difficulty, is_vegetarian, tags, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(recipe.id.to_string())
        .bind(&recipe.name)
        .bind(&recipe.cuisine)
        .bind(serde_json::to_string(&recipe.ingredients)?)
        .bind(&recipe.instructions)
        .bind(i64::from(recipe.prep_time_minutes))
        .bind(recipe.difficulty.as_str())
        .bind(recipe.is_vegetarian)
        .bind(serde_json::to_string(&recipe.tags)?)
        .bind(recipe.created_at.to_rfc3339())
        .bind(recipe.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipe: {e}")))?;

        debug!(recipe_id = %recipe.id, name = %recipe.name, "Created recipe");
        Ok(recipe)
    }

    /// Get a recipe by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails or a stored row is corrupt
    pub async fn get(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(&format!("SELECT {SELECT_COLUMNS} FROM recipes WHERE id = $1"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get recipe: {e}")))?;

        row.as_ref().map(row_to_recipe).transpose()
    }

    /// List recipes matching a filter, in insertion order
    ///
    /// The vegetarian flag and prep time bound are evaluated in SQL; pattern
    /// and tag criteria are checked on the decoded rows.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails or a stored row is corrupt
    pub async fn list(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        let rows = sqlx::query(&format!(
            r"
            SELECT {SELECT_COLUMNS}
            FROM recipes
            WHERE ($1 IS NULL OR is_vegetarian = $1)
              AND ($2 IS NULL OR prep_time_minutes <= $2)
            ORDER BY rowid ASC
            "
        ))
        .bind(filter.is_vegetarian)
        .bind(filter.max_prep_time.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        let mut recipes = Vec::with_capacity(rows.len());
        for row in &rows {
            let recipe = row_to_recipe(row)?;
            if filter.matches(&recipe) {
                recipes.push(recipe);
            }
        }
        Ok(recipes)
    }

    /// Apply a partial update
    ///
    /// Returns `None` when no recipe has this ID.
    ///
    /// # Errors
    ///
    /// Returns a validation error for invalid fields, or an error if database
    /// operation fails
    pub async fn update(&self, id: Uuid, patch: RecipePatch) -> AppResult<Option<Recipe>> {
        let Some(mut recipe) = self.get(id).await? else {
            return Ok(None);
        };
        patch.apply(&mut recipe, Utc::now())?;

        let result = sqlx::query(
            r"
            UPDATE recipes
            SET name = $1, cuisine = $2, ingredients = $3, instructions = $4,
                prep_time_minutes = $5, difficulty = $6, is_vegetarian = $7, tags = $8,
                updated_at = $9
            WHERE id = $10
            ",
        )
        .bind(&recipe.name)
        .bind(&recipe.cuisine)
        .bind(serde_json::to_string(&recipe.ingredients)?)
        .bind(&recipe.instructions)
        .bind(i64::from(recipe.prep_time_minutes))
        .bind(recipe.difficulty.as_str())
        .bind(recipe.is_vegetarian)
        .bind(serde_json::to_string(&recipe.tags)?)
        .bind(recipe.updated_at.to_rfc3339())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update recipe: {e}")))?;

        if result.rows_affected() == 0 {
            // Deleted between the read and the write
            return Ok(None);
        }

        debug!(recipe_id = %id, "Updated recipe");
        Ok(Some(recipe))
    }

    /// Delete a recipe, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete recipe: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of stored recipes
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM recipes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count recipes: {e}")))?;

        Ok(row.get("count"))
    }
}

fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let column = |name: &str| -> AppResult<String> {
        row.try_get(name)
            .map_err(|e| AppError::database(format!("Failed to read recipes.{name}: {e}")))
    };

    let id = column("id")?;
    let prep_time: i64 = row
        .try_get("prep_time_minutes")
        .map_err(|e| AppError::database(format!("Failed to read recipes.prep_time_minutes: {e}")))?;
    let is_vegetarian: bool = row
        .try_get("is_vegetarian")
        .map_err(|e| AppError::database(format!("Failed to read recipes.is_vegetarian: {e}")))?;

    Ok(Recipe {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Invalid stored recipe id '{id}': {e}")))?,
        name: column("name")?,
        cuisine: column("cuisine")?,
        ingredients: serde_json::from_str(&column("ingredients")?)?,
        instructions: column("instructions")?,
        prep_time_minutes: u32::try_from(prep_time).map_err(|e| {
            AppError::database(format!("Invalid stored prep time {prep_time}: {e}"))
        })?,
        difficulty: Difficulty::parse(&column("difficulty")?)?,
        is_vegetarian,
        tags: serde_json::from_str(&column("tags")?)?,
        created_at: parse_timestamp(&column("created_at")?)?,
        updated_at: parse_timestamp(&column("updated_at")?)?,
    })
}

fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid stored timestamp '{value}': {e}")))
}
