// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory stores, test configuration and a scripted inference transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `recipe_explorer`

use anyhow::Result;
use async_trait::async_trait;
use recipe_explorer::{
    assistant::RecipeAssistant,
    config::{DatabaseConfig, DatabaseUrl, Environment, ServerConfig},
    database::{create_pool, RecipesManager},
    inference::{InferenceClient, InferenceTransport, RetryPolicy, TransportError},
    models::{Difficulty, RecipeDraft},
    resources::ServerResources,
};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Configuration pointing at an in-memory database with no inference credential
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        ..ServerConfig::default()
    }
}

/// Standard test store: migrated in-memory SQLite
pub async fn create_test_recipes() -> Result<RecipesManager> {
    init_test_logging();
    let pool = create_pool(&DatabaseUrl::Memory).await?;
    let recipes = RecipesManager::new(pool);
    recipes.migrate().await?;
    Ok(recipes)
}

/// Assistant that never calls a model
pub fn fallback_assistant() -> RecipeAssistant {
    RecipeAssistant::new(None, "test/summarizer", "test/generator")
}

/// Retry policy without waits, for tests that do not control time
pub const fn instant_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        default_wait: Duration::ZERO,
        max_wait: Duration::ZERO,
    }
}

/// Assistant backed by a scripted transport
pub fn scripted_assistant(transport: &Arc<ScriptedTransport>) -> RecipeAssistant {
    let client = InferenceClient::new(
        Arc::clone(transport) as Arc<dyn InferenceTransport>,
        instant_policy(2),
    );
    RecipeAssistant::new(Some(client), "test/summarizer", "test/generator")
}

/// Shared resources over an in-memory store
pub async fn create_test_resources(assistant: RecipeAssistant) -> Result<Arc<ServerResources>> {
    let recipes = create_test_recipes().await?;
    Ok(Arc::new(ServerResources::new(
        recipes,
        assistant,
        test_config(),
    )))
}

/// Minimal valid draft
pub fn draft(name: &str, cuisine: &str, prep_time_minutes: u32, is_vegetarian: bool) -> RecipeDraft {
    RecipeDraft {
        name: name.to_owned(),
        cuisine: cuisine.to_owned(),
        ingredients: vec!["salt".to_owned(), "water".to_owned()],
        instructions: "Step 1: Boil water. Step 2: Add salt.".to_owned(),
        prep_time_minutes,
        difficulty: Difficulty::Easy,
        is_vegetarian,
        tags: Vec::new(),
    }
}

/// A transport failure that needs no network
pub fn transport_failure() -> TransportError {
    TransportError::Decode(serde_json::from_str::<Value>("<html>bad gateway</html>").unwrap_err())
}

/// Inference transport replaying queued responses in order
///
/// Once the script runs out every call fails at the transport level.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    calls: AtomicUsize,
    models: Mutex<Vec<String>>,
    payloads: Mutex<Vec<Value>>,
}

impl ScriptedTransport {
    /// Create a transport answering with `responses`
    pub fn new(responses: Vec<Result<Value, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        })
    }

    /// Number of calls received
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Models called, in order
    pub fn models(&self) -> Vec<String> {
        self.models.lock().unwrap().clone()
    }

    /// Payloads sent, in order
    pub fn payloads(&self) -> Vec<Value> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceTransport for ScriptedTransport {
    async fn post_json(&self, model: &str, payload: &Value) -> Result<Value, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.models.lock().unwrap().push(model.to_owned());
        self.payloads.lock().unwrap().push(payload.clone());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(transport_failure()))
    }
}
