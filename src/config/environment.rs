// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses server, database, CORS and inference settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, env_config, inference};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database file
    SQLite {
        /// File path, relative to the working directory
        path: PathBuf,
    },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error for anything other than a `sqlite:` URL
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let Some(path_str) = s.strip_prefix("sqlite:") else {
            return Err(AppError::config_invalid(format!(
                "Unsupported database URL '{s}', only sqlite: URLs are accepted"
            )));
        };

        let path_str = path_str.trim_start_matches("//");
        match path_str {
            ":memory:" => Ok(Self::Memory),
            "" => Err(AppError::config_invalid("Database URL has an empty path")),
            path => Ok(Self::SQLite {
                path: PathBuf::from(path),
            }),
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/recipes.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Hosted inference configuration
    pub inference: InferenceConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*`
    pub allowed_origins: String,
}

/// Hosted inference API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Bearer credential; remote calls are skipped when absent
    pub api_key: Option<String>,
    /// Base URL, model ids are appended as a path segment
    pub base_url: String,
    /// Model used by the simplify route
    pub summarization_model: String,
    /// Model used by the suggest route
    pub generation_model: String,
    /// Attempts per remote call
    pub max_attempts: u32,
    /// Wait when a loading response has no usable estimate
    pub default_wait_secs: f64,
    /// Cap on any single loading wait
    pub max_wait_secs: f64,
    /// Request timeout
    pub timeout_secs: u64,
    /// Connect timeout
    pub connect_timeout_secs: u64,
}

impl fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("summarization_model", &self.summarization_model)
            .field("generation_model", &self.generation_model)
            .field("max_attempts", &self.max_attempts)
            .field("default_wait_secs", &self.default_wait_secs)
            .field("max_wait_secs", &self.max_wait_secs)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: inference::BASE_URL.to_owned(),
            summarization_model: inference::SUMMARIZATION_MODEL.to_owned(),
            generation_model: inference::GENERATION_MODEL.to_owned(),
            max_attempts: inference::MAX_ATTEMPTS,
            default_wait_secs: inference::DEFAULT_WAIT_SECS,
            max_wait_secs: inference::MAX_WAIT_SECS,
            timeout_secs: inference::REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: inference::CONNECT_TIMEOUT_SECS,
        }
    }
}

impl InferenceConfig {
    /// Whether a credential is available for remote calls
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            environment: Environment::default(),
            database: DatabaseConfig {
                url: DatabaseUrl::default(),
            },
            cors: CorsConfig {
                allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
            },
            inference: InferenceConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a numeric value is malformed or the
    /// database URL is not a SQLite URL
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`]
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let config = Self {
            http_port: parse_or(&get, env_config::HTTP_PORT, defaults::HTTP_PORT)?,
            host: get(env_config::HOST).unwrap_or_else(|| defaults::HOST.to_owned()),
            environment: get(env_config::ENVIRONMENT)
                .map(|v| Environment::from_str_or_default(&v))
                .unwrap_or_default(),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(
                    &get(env_config::DATABASE_URL)
                        .unwrap_or_else(|| defaults::DATABASE_URL.to_owned()),
                )?,
            },
            cors: CorsConfig {
                allowed_origins: get(env_config::CORS_ALLOWED_ORIGINS)
                    .unwrap_or_else(|| defaults::CORS_ALLOWED_ORIGINS.to_owned()),
            },
            inference: InferenceConfig {
                api_key: get(env_config::HUGGINGFACE_API_KEY),
                base_url: get(env_config::INFERENCE_BASE_URL)
                    .map(|v| v.trim_end_matches('/').to_owned())
                    .unwrap_or_else(|| inference::BASE_URL.to_owned()),
                summarization_model: get(env_config::SUMMARIZATION_MODEL)
                    .unwrap_or_else(|| inference::SUMMARIZATION_MODEL.to_owned()),
                generation_model: get(env_config::GENERATION_MODEL)
                    .unwrap_or_else(|| inference::GENERATION_MODEL.to_owned()),
                max_attempts: parse_or(
                    &get,
                    env_config::INFERENCE_MAX_ATTEMPTS,
                    inference::MAX_ATTEMPTS,
                )?,
                default_wait_secs: parse_seconds(
                    &get,
                    env_config::INFERENCE_DEFAULT_WAIT_SECS,
                    inference::DEFAULT_WAIT_SECS,
                )?,
                max_wait_secs: parse_seconds(
                    &get,
                    env_config::INFERENCE_MAX_WAIT_SECS,
                    inference::MAX_WAIT_SECS,
                )?,
                timeout_secs: parse_or(
                    &get,
                    env_config::INFERENCE_TIMEOUT_SECS,
                    inference::REQUEST_TIMEOUT_SECS,
                )?,
                connect_timeout_secs: parse_or(
                    &get,
                    env_config::INFERENCE_CONNECT_TIMEOUT_SECS,
                    inference::CONNECT_TIMEOUT_SECS,
                )?,
            },
        };

        Ok(config)
    }

    /// Address the HTTP listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Explorer Configuration:\n\
             - Environment: {}\n\
             - Listen: {}\n\
             - Database: {}\n\
             - CORS Origins: {}\n\
             - Inference API: {}\n\
             - Summarization Model: {}\n\
             - Generation Model: {}\n\
             - Attempts: {} (loading wait {}s, max {}s)",
            self.environment,
            self.bind_address(),
            self.database.url,
            self.cors.allowed_origins,
            if self.inference.is_enabled() {
                "Enabled"
            } else {
                "Disabled (no HUGGINGFACE_API_KEY, fallback only)"
            },
            self.inference.summarization_model,
            self.inference.generation_model,
            self.inference.max_attempts,
            self.inference.default_wait_secs,
            self.inference.max_wait_secs,
        )
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(key).map_or(Ok(default), |raw| {
        raw.parse::<T>()
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}")))
    })
}

fn parse_seconds<G>(get: &G, key: &str, default: f64) -> AppResult<f64>
where
    G: Fn(&str) -> Option<String>,
{
    let value = parse_or(get, key, default)?;
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::config_invalid(format!(
            "Invalid {key} value '{value}': must be a non-negative number of seconds"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.http_port, 5000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(
            config.database.url,
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/recipes.db")
            }
        );
        assert!(config.inference.api_key.is_none());
        assert_eq!(config.inference.max_attempts, 2);
        assert!((config.inference.max_wait_secs - 30.0).abs() < f64::EPSILON);
        assert_eq!(config.inference.generation_model, "gpt2");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HTTP_PORT", "8088"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("HUGGINGFACE_API_KEY", "hf_secret"),
            ("INFERENCE_BASE_URL", "http://localhost:9000/models/"),
            ("INFERENCE_MAX_ATTEMPTS", "4"),
            ("INFERENCE_DEFAULT_WAIT_SECS", "2.5"),
        ]))
        .unwrap();

        assert_eq!(config.http_port, 8088);
        assert!(config.database.url.is_memory());
        assert_eq!(config.inference.api_key.as_deref(), Some("hf_secret"));
        assert_eq!(config.inference.base_url, "http://localhost:9000/models");
        assert_eq!(config.inference.max_attempts, 4);
        assert!((config.inference.default_wait_secs - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_blank_api_key_counts_as_unset() {
        let config = ServerConfig::from_lookup(lookup(&[("HUGGINGFACE_API_KEY", "  ")])).unwrap();
        assert!(!config.inference.is_enabled());
    }

    #[test]
    fn test_malformed_port_is_config_error() {
        let err = ServerConfig::from_lookup(lookup(&[("HTTP_PORT", "not-a-port")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        assert!(err.message.contains("HTTP_PORT"));
    }

    #[test]
    fn test_negative_wait_is_rejected() {
        let result =
            ServerConfig::from_lookup(lookup(&[("INFERENCE_MAX_WAIT_SECS", "-1")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_postgres_url_is_rejected() {
        let err = DatabaseUrl::parse_url("postgres://localhost/recipes").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_sqlite_url_forms() {
        assert!(DatabaseUrl::parse_url("sqlite::memory:").unwrap().is_memory());
        assert_eq!(
            DatabaseUrl::parse_url("sqlite://data/x.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("data/x.db")
            }
        );
    }

    #[test]
    fn test_summary_redacts_credential() {
        let config =
            ServerConfig::from_lookup(lookup(&[("HUGGINGFACE_API_KEY", "hf_secret")])).unwrap();
        let summary = config.summary();

        assert!(summary.contains("Inference API: Enabled"));
        assert!(!summary.contains("hf_secret"));
        assert!(!format!("{:?}", config.inference).contains("hf_secret"));
    }
}
