// ABOUTME: Application constants and default configuration values
// ABOUTME: Central place for server defaults, inference endpoints and retry timing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants shared across configuration, inference and HTTP modules

/// Server defaults used when the environment does not override them
pub mod defaults {
    /// HTTP port the API listens on
    pub const HTTP_PORT: u16 = 5000;
    /// Interface the API binds to
    pub const HOST: &str = "127.0.0.1";
    /// SQLite database location
    pub const DATABASE_URL: &str = "sqlite:./data/recipes.db";
    /// CORS origin list, `*` allows any origin
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Hosted inference API defaults
pub mod inference {
    /// Base URL; the model id is appended as a path segment
    pub const BASE_URL: &str = "https://api-inference.huggingface.co/models";
    /// Model used to summarize cooking instructions
    pub const SUMMARIZATION_MODEL: &str = "facebook/bart-large-cnn";
    /// Model used to generate recipe suggestions
    pub const GENERATION_MODEL: &str = "gpt2";
    /// Attempts per remote call, including the first
    pub const MAX_ATTEMPTS: u32 = 2;
    /// Wait applied when a loading response carries no usable `estimated_time`
    pub const DEFAULT_WAIT_SECS: f64 = 20.0;
    /// Upper bound on any single loading wait
    pub const MAX_WAIT_SECS: f64 = 30.0;
    /// Whole-request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
    /// TCP connect timeout
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Summarization parameters
    pub const SUMMARY_MAX_LENGTH: u32 = 150;
    /// Summarization parameters
    pub const SUMMARY_MIN_LENGTH: u32 = 40;

    /// Generation parameters
    pub const GENERATION_MAX_NEW_TOKENS: u32 = 120;
    /// Generation parameters
    pub const GENERATION_TEMPERATURE: f64 = 0.7;
    /// Generation parameters
    pub const GENERATION_TOP_P: f64 = 0.9;
    /// Generated text must be longer than this (in characters, after trimming)
    pub const GENERATION_MIN_CHARS: usize = 20;
}

/// Environment variable names
pub mod env_config {
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Inference API credential
    pub const HUGGINGFACE_API_KEY: &str = "HUGGINGFACE_API_KEY";
    /// Inference API base URL
    pub const INFERENCE_BASE_URL: &str = "INFERENCE_BASE_URL";
    /// Summarization model id
    pub const SUMMARIZATION_MODEL: &str = "SUMMARIZATION_MODEL";
    /// Generation model id
    pub const GENERATION_MODEL: &str = "GENERATION_MODEL";
    /// Attempts per remote call
    pub const INFERENCE_MAX_ATTEMPTS: &str = "INFERENCE_MAX_ATTEMPTS";
    /// Default loading wait
    pub const INFERENCE_DEFAULT_WAIT_SECS: &str = "INFERENCE_DEFAULT_WAIT_SECS";
    /// Loading wait cap
    pub const INFERENCE_MAX_WAIT_SECS: &str = "INFERENCE_MAX_WAIT_SECS";
    /// Request timeout
    pub const INFERENCE_TIMEOUT_SECS: &str = "INFERENCE_TIMEOUT_SECS";
    /// Connect timeout
    pub const INFERENCE_CONNECT_TIMEOUT_SECS: &str = "INFERENCE_CONNECT_TIMEOUT_SECS";
}

/// Service names for structured logging
pub mod service_names {
    /// API server
    pub const RECIPE_EXPLORER_SERVER: &str = "recipe-explorer-server";
}
