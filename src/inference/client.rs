// ABOUTME: Retrying inference client that waits out model warm-up responses
// ABOUTME: Returns the last JSON response, or RemoteCallError once transport attempts run out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::retry::{is_loading, RetryPolicy};
use super::{HttpTransport, InferenceTransport, TransportError};
use crate::config::InferenceConfig;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Every attempt of a remote call failed at the transport level
#[derive(Debug, Error)]
pub enum RemoteCallError {
    /// No attempt produced a JSON response
    #[error("inference call to {model} failed after {attempts} attempt(s): {source}")]
    Exhausted {
        /// Model id that was called
        model: String,
        /// Attempts made
        attempts: u32,
        /// Error from the final attempt
        #[source]
        source: TransportError,
    },
}

/// Retrying client over an [`InferenceTransport`]
#[derive(Clone)]
pub struct InferenceClient {
    transport: Arc<dyn InferenceTransport>,
    policy: RetryPolicy,
}

impl InferenceClient {
    /// Create a client over any transport
    #[must_use]
    pub fn new(transport: Arc<dyn InferenceTransport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Create an HTTP-backed client, or `None` when no credential is configured
    #[must_use]
    pub fn from_config(config: &InferenceConfig) -> Option<Self> {
        let transport = HttpTransport::from_config(config)?;
        Some(Self::new(
            Arc::new(transport),
            RetryPolicy::from_config(config),
        ))
    }

    /// Retry policy in effect
    #[must_use]
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Call `model` with `payload`, retrying per the policy
    ///
    /// A loading response is retried after a capped wait while attempts
    /// remain; on the last attempt it is returned as-is and callers must treat
    /// it as unusable. Any other JSON response, success or error, is returned
    /// immediately. Transport failures are retried without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteCallError::Exhausted`] when the final attempt fails at
    /// the transport level
    pub async fn call(&self, model: &str, payload: &Value) -> Result<Value, RemoteCallError> {
        let attempts = self.policy.attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;
            info!(model, attempt, attempts, "Calling inference model");

            match self.transport.post_json(model, payload).await {
                Ok(response) if is_loading(&response) && attempt < attempts => {
                    let wait = self.policy.loading_wait(&response);
                    warn!(
                        model,
                        attempt,
                        wait_secs = wait.as_secs_f64(),
                        "Model is loading, waiting before retry"
                    );
                    tokio::time::sleep(wait).await;
                }
                Ok(response) => {
                    if is_loading(&response) {
                        warn!(model, attempts, "Model still loading after final attempt");
                    } else {
                        debug!(model, attempt, "Inference call returned");
                    }
                    return Ok(response);
                }
                Err(e) if attempt < attempts => {
                    warn!(model, attempt, error = %e, "Inference attempt failed, retrying");
                }
                Err(e) => {
                    error!(model, attempts, error = %e, "Inference call failed, attempts exhausted");
                    return Err(RemoteCallError::Exhausted {
                        model: model.to_owned(),
                        attempts,
                        source: e,
                    });
                }
            }
        }
    }
}

impl fmt::Debug for InferenceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceClient")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
