// ABOUTME: Shared HTTP client construction with connection pooling and timeout configuration
// ABOUTME: Builds the reqwest client used for outbound inference calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::InferenceConfig;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create a new HTTP client with custom timeout settings
///
/// Falls back to a default client if the builder fails (only possible when
/// the TLS backend cannot initialize).
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .user_agent(concat!("recipe-explorer/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Client tuned for the hosted inference API
#[must_use]
pub fn inference_client(config: &InferenceConfig) -> Client {
    create_client_with_timeout(config.timeout_secs, config.connect_timeout_secs)
}
