// ABOUTME: Retry policy for hosted models that answer "loading" while warming up
// ABOUTME: Detects loading responses and turns their estimated_time hint into a capped wait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::InferenceConfig;
use serde_json::Value;
use std::time::Duration;

/// Attempt bound and loading-wait timing for remote calls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Attempts per call, including the first; 0 behaves like 1
    pub max_attempts: u32,
    /// Wait used when the response has no usable `estimated_time`
    pub default_wait: Duration,
    /// Cap applied to every wait
    pub max_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&InferenceConfig::default())
    }
}

impl RetryPolicy {
    /// Build the policy from inference configuration
    #[must_use]
    pub fn from_config(config: &InferenceConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            default_wait: seconds(config.default_wait_secs),
            max_wait: seconds(config.max_wait_secs),
        }
    }

    /// Number of attempts actually made
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// How long to wait before retrying after a loading response
    ///
    /// `estimated_time` must be a positive number to be used; anything else
    /// falls back to the default wait. The result never exceeds `max_wait`.
    #[must_use]
    pub fn loading_wait(&self, response: &Value) -> Duration {
        let hinted = response
            .get("estimated_time")
            .and_then(Value::as_f64)
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .map(seconds);

        hinted.unwrap_or(self.default_wait).min(self.max_wait)
    }
}

/// Whether a response reports that the model is still loading
#[must_use]
pub fn is_loading(response: &Value) -> bool {
    response
        .get("error")
        .and_then(Value::as_str)
        .is_some_and(|message| message.contains("loading"))
}

fn seconds(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}
