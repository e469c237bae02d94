// ABOUTME: Hosted inference API access with bounded retry on model warm-up
// ABOUTME: Defines the transport seam, its error type and re-exports the retrying client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Inference
//!
//! Outbound calls to a hosted text-generation API. A call is a JSON `POST` to
//! `{base_url}/{model}`. Hosted models can be cold; while warming up they
//! answer with `{"error": "... loading ...", "estimated_time": <secs>}`. The
//! [`InferenceClient`] waits (capped) and retries on that answer, and retries
//! immediately on transport failures, up to a fixed number of attempts.
//!
//! The wire is abstracted behind [`InferenceTransport`] so the retry logic can
//! be exercised without network access.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Retrying client
pub mod client;
/// Loading detection and wait computation
pub mod retry;
/// reqwest-backed transport
pub mod transport;

pub use client::{InferenceClient, RemoteCallError};
pub use retry::{is_loading, RetryPolicy};
pub use transport::HttpTransport;

/// A single attempt failed before a JSON body was obtained
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, timeout or body read failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The response body was not JSON
    #[error("response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One request/response exchange with a model endpoint
#[async_trait]
pub trait InferenceTransport: Send + Sync {
    /// POST `payload` to the endpoint for `model` and decode the JSON body
    ///
    /// Non-2xx responses are still decoded: the hosted API reports model
    /// errors (including warm-up) in the body.
    async fn post_json(&self, model: &str, payload: &Value) -> Result<Value, TransportError>;
}
