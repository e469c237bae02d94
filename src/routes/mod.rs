// ABOUTME: Route module organization for Recipe Explorer HTTP endpoints
// ABOUTME: Groups recipe CRUD, assistant and health routes and shared rejection mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module holds route definitions and thin handlers that
//! delegate to the store or the assistant.

/// Simplify and suggest routes under `/api/ai`
pub mod assistant;
/// Liveness and readiness routes
pub mod health;
/// Recipe CRUD and search routes under `/api/recipes`
pub mod recipes;

pub use assistant::AssistantRoutes;
pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;

use crate::errors::{AppError, ErrorCode};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use uuid::Uuid;

/// Map a JSON body rejection to a 400 error with the extractor's explanation
pub(crate) fn json_rejection(rejection: &JsonRejection) -> AppError {
    AppError::new(
        ErrorCode::InvalidFormat,
        format!("Invalid request body: {}", rejection.body_text()),
    )
}

/// Map a query-string rejection to a 400 error
pub(crate) fn query_rejection(rejection: &QueryRejection) -> AppError {
    AppError::new(
        ErrorCode::InvalidFormat,
        format!("Invalid query string: {}", rejection.body_text()),
    )
}

/// Parse a path id, rejecting malformed values with 400
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::new(ErrorCode::InvalidFormat, format!("Invalid recipe id '{raw}'")))
}
