// ABOUTME: Main library entry point for the Recipe Explorer service
// ABOUTME: Provides the recipe REST API, its SQLite store and the simplify/suggest assistant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Explorer
//!
//! A REST service over a recipe catalog with two assisted text features:
//! condensing step-numbered instructions into one sentence, and suggesting a
//! recipe from a list of ingredients. Both features try a hosted inference
//! model first and fall back to deterministic local rules, so they always
//! answer.
//!
//! ## Architecture
//!
//! - **Database**: SQLite recipe store with query-string filters
//! - **Inference**: Hosted model client with loading-aware retry
//! - **Assistant**: Model-or-fallback resolution for simplify and suggest
//! - **Routes**: axum handlers for recipes, assistant and health endpoints
//! - **Config**: Environment-driven server configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_explorer::config::ServerConfig;
//! use recipe_explorer::errors::AppResult;
//! use recipe_explorer::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::from_config(config).await?;
//!     recipe_explorer::server::serve(Arc::new(resources)).await
//! }
//! ```

/// Simplify and suggest service with local fallbacks
pub mod assistant;

/// Environment configuration
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Recipe persistence
pub mod database;

/// Hosted inference client
pub mod inference;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (request ids, tracing spans, CORS)
pub mod middleware;

/// Shared handler dependencies
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and HTTP serving
pub mod server;

/// Shared helpers
pub mod utils;

pub use recipe_core::{errors, models};
