// ABOUTME: Assistant route handlers for instruction simplification and recipe suggestion
// ABOUTME: Validates request bodies and always answers with text plus its source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::json_rejection;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// `POST /api/ai/simplify` body
#[derive(Debug, Deserialize)]
pub struct SimplifyRequest {
    /// Free-text cooking instructions
    pub instructions: Option<String>,
}

/// `POST /api/ai/simplify` response
#[derive(Debug, Serialize, Deserialize)]
pub struct SimplifyResponse {
    /// One-sentence version of the instructions
    pub simplified: String,
    /// `model` or `fallback`
    pub source: String,
}

/// `POST /api/ai/suggest` body
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    /// Ingredient names
    pub ingredients: Option<Vec<String>>,
}

/// `POST /api/ai/suggest` response
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    /// Suggested recipe text
    pub suggestion: String,
    /// `model` or `fallback`
    pub source: String,
}

/// Assistant routes implementation
pub struct AssistantRoutes;

impl AssistantRoutes {
    /// Create all assistant routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/ai/simplify", post(Self::handle_simplify))
            .route("/api/ai/suggest", post(Self::handle_suggest))
            .with_state(resources)
    }

    /// Handle POST /api/ai/simplify - Condense instructions into one sentence
    async fn handle_simplify(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<SimplifyRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| json_rejection(&e))?;
        let instructions = request
            .instructions
            .ok_or_else(|| AppError::missing_field("instructions"))?;

        let resolved = resources.assistant.simplify(&instructions).await;

        let response = SimplifyResponse {
            simplified: resolved.text,
            source: resolved.source.label().to_owned(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/ai/suggest - Suggest a recipe for the given ingredients
    async fn handle_suggest(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<SuggestRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| json_rejection(&e))?;
        let ingredients = request
            .ingredients
            .ok_or_else(|| AppError::missing_field("ingredients"))?;

        let resolved = resources.assistant.suggest(&ingredients).await?;

        let response = SuggestResponse {
            suggestion: resolved.text,
            source: resolved.source.label().to_owned(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
