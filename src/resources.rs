// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Bundles the recipe store, the assistant and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::assistant::RecipeAssistant;
use crate::config::ServerConfig;
use crate::database::{create_pool, RecipesManager};
use crate::errors::AppResult;
use std::sync::Arc;
use tracing::info;

/// Dependencies shared by all handlers, built once at startup
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Recipe persistence
    pub recipes: RecipesManager,
    /// Simplify and suggest service
    pub assistant: RecipeAssistant,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources from already constructed parts
    #[must_use]
    pub fn new(recipes: RecipesManager, assistant: RecipeAssistant, config: ServerConfig) -> Self {
        Self {
            recipes,
            assistant,
            config: Arc::new(config),
        }
    }

    /// Connect to the database, run migrations and build the assistant
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn from_config(config: ServerConfig) -> AppResult<Self> {
        let pool = create_pool(&config.database.url).await?;
        let recipes = RecipesManager::new(pool);
        recipes.migrate().await?;

        let assistant = RecipeAssistant::from_config(&config.inference);
        if assistant.is_model_enabled() {
            info!("Hosted inference enabled, local rules used as fallback");
        } else {
            info!("No inference credential configured, using local rules only");
        }

        Ok(Self::new(recipes, assistant, config))
    }
}
