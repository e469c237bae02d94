// ABOUTME: SQLite persistence for recipes with pool construction and schema migration
// ABOUTME: Re-exports the recipes manager, list filters and the sample catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! Recipes live in a single SQLite table. Ingredient and tag lists are stored
//! as JSON text columns; the structured filters (vegetarian flag, prep time)
//! run in SQL and the pattern filters run against decoded rows.

/// Query-string filters for recipe listing
pub mod filter;
/// Recipe CRUD operations
pub mod recipes;
/// Sample catalog used by the `seed-recipes` binary
pub mod seed_recipes;

pub use filter::{RecipeFilter, RecipeQuery};
pub use recipes::RecipesManager;

use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Open a connection pool for the configured database
///
/// File databases are created if missing, including the parent directory.
/// In-memory databases get a single connection so every query sees the same
/// database.
///
/// # Errors
///
/// Returns a database error if the directory cannot be created or the
/// connection fails
pub async fn create_pool(url: &DatabaseUrl) -> AppResult<SqlitePool> {
    let (connection_url, options) = match url {
        DatabaseUrl::Memory => (
            url.to_connection_string(),
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None),
        ),
        DatabaseUrl::SQLite { path } => {
            ensure_parent_dir(path)?;
            (
                format!("{}?mode=rwc", url.to_connection_string()),
                SqlitePoolOptions::new().max_connections(5),
            )
        }
    };

    info!("Connecting to database: {url}");
    options
        .connect(&connection_url)
        .await
        .map_err(|e| AppError::database(format!("Failed to connect to {url}: {e}")))
}

fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir).map_err(|e| {
            AppError::database(format!(
                "Failed to create database directory {}: {e}",
                dir.display()
            ))
        }),
        _ => Ok(()),
    }
}
