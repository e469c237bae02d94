// ABOUTME: Recipe assistant resolving simplify/suggest requests via a hosted model or local rules
// ABOUTME: Builds model payloads, judges responses, and falls back to deterministic text generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Assistant
//!
//! Every request resolves in two stages. First the hosted model is tried,
//! producing either usable text or a [`FallbackReason`]. Then the result is
//! resolved unconditionally: a reason is answered with the local rule-based
//! generator. Callers always get text back, tagged with its [`TextSource`].

use crate::config::InferenceConfig;
use crate::constants::inference;
use crate::errors::AppResult;
use crate::inference::{is_loading, InferenceClient};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use tracing::{info, warn};

/// Rule-based instruction simplifier
pub mod simplify;
/// Template-based recipe suggestions
pub mod suggest;

pub use simplify::simplify_instructions;
pub use suggest::{normalize_ingredient_names, suggest_recipe, Classification, Suggestion};

/// Why the local generator answered instead of the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No credential configured, the model was not called
    NotConfigured,
    /// The model was still loading after the last attempt
    ModelLoading,
    /// The model answered but the text was missing, empty or too short
    UnusableResponse,
    /// Every attempt failed at the transport level
    RemoteFailed,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotConfigured => "not_configured",
            Self::ModelLoading => "model_loading",
            Self::UnusableResponse => "unusable_response",
            Self::RemoteFailed => "remote_failed",
        })
    }
}

/// Where resolved text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// Hosted model output
    Model,
    /// Local rule-based output
    Fallback(FallbackReason),
}

impl TextSource {
    /// Label exposed in API responses
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Fallback(_) => "fallback",
        }
    }
}

/// Final text for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Text returned to the client
    pub text: String,
    /// Producer of the text
    pub source: TextSource,
}

impl Resolved {
    fn resolve(attempt: Result<String, FallbackReason>, fallback: impl FnOnce() -> String) -> Self {
        match attempt {
            Ok(text) => Self {
                text,
                source: TextSource::Model,
            },
            Err(reason) => Self {
                text: fallback(),
                source: TextSource::Fallback(reason),
            },
        }
    }
}

/// Simplify and suggest service
#[derive(Debug, Clone)]
pub struct RecipeAssistant {
    client: Option<InferenceClient>,
    summarization_model: String,
    generation_model: String,
}

impl RecipeAssistant {
    /// Create an assistant; without a client every request uses the fallback
    pub fn new(
        client: Option<InferenceClient>,
        summarization_model: impl Into<String>,
        generation_model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            summarization_model: summarization_model.into(),
            generation_model: generation_model.into(),
        }
    }

    /// Create an HTTP-backed assistant from configuration
    #[must_use]
    pub fn from_config(config: &InferenceConfig) -> Self {
        Self::new(
            InferenceClient::from_config(config),
            config.summarization_model.as_str(),
            config.generation_model.as_str(),
        )
    }

    /// Whether requests will try the hosted model first
    #[must_use]
    pub const fn is_model_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Condense instructions into one short sentence
    pub async fn simplify(&self, instructions: &str) -> Resolved {
        let attempt = self
            .generate(
                &self.summarization_model,
                simplify_payload(instructions),
                extract_summary,
            )
            .await;

        let resolved = Resolved::resolve(attempt, || simplify_instructions(instructions));
        log_resolution("simplify", &resolved);
        resolved
    }

    /// Suggest a recipe for the given ingredients
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_INPUT` error when no non-blank ingredient is given;
    /// the model is not called in that case
    pub async fn suggest(&self, ingredients: &[String]) -> AppResult<Resolved> {
        let ingredients = normalize_ingredient_names(ingredients)?;
        let joined = ingredients.join(", ");

        let attempt = self
            .generate(
                &self.generation_model,
                suggest_payload(&suggest_prompt(&ingredients)),
                extract_generated_text,
            )
            .await
            .map(|generated| format!("Recipe using {joined}:\n\n{generated}"));

        let resolved = match attempt {
            Ok(text) => Resolved {
                text,
                source: TextSource::Model,
            },
            Err(reason) => Resolved {
                text: suggest_recipe(&ingredients)?,
                source: TextSource::Fallback(reason),
            },
        };
        log_resolution("suggest", &resolved);
        Ok(resolved)
    }

    /// Stage one: call the model and extract usable text
    async fn generate(
        &self,
        model: &str,
        payload: Value,
        extract: fn(&Value) -> Option<String>,
    ) -> Result<String, FallbackReason> {
        let client = self.client.as_ref().ok_or(FallbackReason::NotConfigured)?;

        let response = client.call(model, &payload).await.map_err(|e| {
            warn!(model, error = %e, "Inference call failed, using fallback");
            FallbackReason::RemoteFailed
        })?;

        if is_loading(&response) {
            return Err(FallbackReason::ModelLoading);
        }

        extract(&response).ok_or_else(|| {
            warn!(model, "Inference response had no usable text, using fallback");
            FallbackReason::UnusableResponse
        })
    }
}

fn log_resolution(operation: &str, resolved: &Resolved) {
    match resolved.source {
        TextSource::Model => info!(operation, "Resolved with model output"),
        TextSource::Fallback(reason) => {
            info!(operation, %reason, "Resolved with fallback generator");
        }
    }
}

/// Summarization request body
#[must_use]
pub fn simplify_payload(instructions: &str) -> Value {
    json!({
        "inputs": instructions,
        "parameters": {
            "max_length": inference::SUMMARY_MAX_LENGTH,
            "min_length": inference::SUMMARY_MIN_LENGTH,
            "do_sample": false
        }
    })
}

/// Prompt sent to the generation model
#[must_use]
pub fn suggest_prompt(ingredients: &[String]) -> String {
    format!(
        "Write a recipe using these ingredients: {}. Include steps.",
        ingredients.join(", ")
    )
}

/// Generation request body
#[must_use]
pub fn suggest_payload(prompt: &str) -> Value {
    json!({
        "inputs": prompt,
        "parameters": {
            "max_new_tokens": inference::GENERATION_MAX_NEW_TOKENS,
            "temperature": inference::GENERATION_TEMPERATURE,
            "top_p": inference::GENERATION_TOP_P,
            "do_sample": true,
            "return_full_text": false
        }
    })
}

/// `[{"summary_text": "..."}]` with a non-empty summary, and no `error`
fn extract_summary(response: &Value) -> Option<String> {
    if response.get("error").is_some() {
        return None;
    }
    response
        .get(0)?
        .get("summary_text")?
        .as_str()
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// `[{"generated_text": "..."}]` longer than the minimum once trimmed, and no `error`
fn extract_generated_text(response: &Value) -> Option<String> {
    if response.get("error").is_some() {
        return None;
    }
    response
        .get(0)?
        .get("generated_text")?
        .as_str()
        .map(str::trim)
        .filter(|text| text.chars().count() > inference::GENERATION_MIN_CHARS)
        .map(str::to_owned)
}
