// ABOUTME: Recipe route handlers for listing, searching and CRUD operations
// ABOUTME: Maps query parameters to store filters and request bodies to validated drafts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! - `GET /api/recipes` lists recipes matching `search`, `cuisine`,
//!   `isVegetarian`, `maxPrepTime`, `tags` and `ingredient`
//! - `GET /api/recipes/:id` fetches one recipe
//! - `POST /api/recipes` creates a recipe (201)
//! - `PUT /api/recipes/:id` partially updates a recipe
//! - `DELETE /api/recipes/:id` deletes a recipe

use super::{json_rejection, parse_id, query_rejection};
use crate::database::{RecipeFilter, RecipeQuery};
use crate::errors::AppError;
use crate::models::{RecipeDraft, RecipePatch};
use crate::resources::ServerResources;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/recipes",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/recipes/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/recipes - List recipes matching the query filters
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<RecipeQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) = query.map_err(|e| query_rejection(&e))?;
        let filter = RecipeFilter::from_query(&query)?;

        let recipes = resources.recipes.list(&filter).await?;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle GET /api/recipes/:id - Get a specific recipe
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_id(&id)?;
        let recipe = resources
            .recipes
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe"))?;

        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle POST /api/recipes - Create a recipe
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<RecipeDraft>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(draft) = body.map_err(|e| json_rejection(&e))?;
        let recipe = resources.recipes.create(draft).await?;

        info!(recipe_id = %recipe.id, name = %recipe.name, "Recipe created");
        Ok((StatusCode::CREATED, Json(recipe)).into_response())
    }

    /// Handle PUT /api/recipes/:id - Partially update a recipe
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        body: Result<Json<RecipePatch>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let id = parse_id(&id)?;
        let Json(patch) = body.map_err(|e| json_rejection(&e))?;

        let recipe = resources
            .recipes
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe"))?;

        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle DELETE /api/recipes/:id - Delete a recipe
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_id(&id)?;

        if !resources.recipes.delete(id).await? {
            return Err(AppError::not_found("Recipe"));
        }

        info!(recipe_id = %id, "Recipe deleted");
        Ok((StatusCode::OK, Json(json!({ "message": "Recipe deleted" }))).into_response())
    }
}
