// ABOUTME: reqwest implementation of the inference transport
// ABOUTME: Sends bearer-authenticated JSON POSTs and decodes the body regardless of status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{InferenceTransport, TransportError};
use crate::config::InferenceConfig;
use crate::utils::http_client::inference_client;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use tracing::{debug, instrument};

/// Transport backed by a pooled `reqwest::Client`
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    /// Create a transport from its parts
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
        }
    }

    /// Create a transport from configuration, or `None` when no credential is set
    #[must_use]
    pub fn from_config(config: &InferenceConfig) -> Option<Self> {
        let api_key = config.api_key.as_deref()?;
        Some(Self::new(
            inference_client(config),
            config.base_url.as_str(),
            api_key,
        ))
    }

    /// Endpoint URL for a model id
    #[must_use]
    pub fn model_url(&self, model: &str) -> String {
        format!("{}/{model}", self.base_url)
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl InferenceTransport for HttpTransport {
    #[instrument(skip(self, payload), fields(model = %model))]
    async fn post_json(&self, model: &str, payload: &Value) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(self.model_url(model))
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "Received inference response");

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_url_joins_without_double_slash() {
        let transport = HttpTransport::new(Client::new(), "http://localhost:9000/models/", "k");
        assert_eq!(
            transport.model_url("facebook/bart-large-cnn"),
            "http://localhost:9000/models/facebook/bart-large-cnn"
        );
    }

    #[test]
    fn test_from_config_requires_credential() {
        let mut config = InferenceConfig::default();
        assert!(HttpTransport::from_config(&config).is_none());

        config.api_key = Some("hf_test".to_owned());
        let transport = HttpTransport::from_config(&config).unwrap();
        assert!(!format!("{transport:?}").contains("hf_test"));
    }
}
