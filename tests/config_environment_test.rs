// ABOUTME: Integration tests for environment-driven server configuration
// ABOUTME: Sets real environment variables, serialized so tests do not interfere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_explorer::assistant::RecipeAssistant;
use recipe_explorer::config::{DatabaseUrl, Environment, ServerConfig};
use recipe_explorer::errors::ErrorCode;
use recipe_explorer::inference::RetryPolicy;
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: &[&str] = &[
    "HTTP_PORT",
    "HOST",
    "DATABASE_URL",
    "ENVIRONMENT",
    "CORS_ALLOWED_ORIGINS",
    "HUGGINGFACE_API_KEY",
    "INFERENCE_BASE_URL",
    "SUMMARIZATION_MODEL",
    "GENERATION_MODEL",
    "INFERENCE_MAX_ATTEMPTS",
    "INFERENCE_DEFAULT_WAIT_SECS",
    "INFERENCE_MAX_WAIT_SECS",
    "INFERENCE_TIMEOUT_SECS",
    "INFERENCE_CONNECT_TIMEOUT_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
}

#[test]
fn test_database_url_parsing() {
    assert_eq!(
        DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
        DatabaseUrl::Memory
    );
    assert!(DatabaseUrl::parse_url("sqlite::memory:").unwrap().is_memory());

    let file = DatabaseUrl::parse_url("sqlite:./tmp/test.db").unwrap();
    assert_eq!(file.to_connection_string(), "sqlite:./tmp/test.db");

    let err = DatabaseUrl::parse_url("postgresql://localhost/recipes").unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(DatabaseUrl::parse_url("sqlite:").is_err());
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 5000);
    assert_eq!(config.bind_address(), "127.0.0.1:5000");
    assert_eq!(config.cors.allowed_origins, "*");
    assert!(!config.inference.is_enabled());
    assert!(!RecipeAssistant::from_config(&config.inference).is_model_enabled());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("HTTP_PORT", "8081");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("HUGGINGFACE_API_KEY", "hf_test_secret");
    env::set_var("INFERENCE_MAX_ATTEMPTS", "3");
    env::set_var("INFERENCE_DEFAULT_WAIT_SECS", "5");
    env::set_var("INFERENCE_MAX_WAIT_SECS", "12.5");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 8081);
    assert_eq!(config.database.url, DatabaseUrl::Memory);
    assert!(config.environment.is_production());
    assert!(config.inference.is_enabled());

    let policy = RetryPolicy::from_config(&config.inference);
    assert_eq!(policy.attempts(), 3);
    assert_eq!(policy.default_wait, Duration::from_secs(5));
    assert_eq!(policy.max_wait, Duration::from_millis(12_500));

    assert!(RecipeAssistant::from_config(&config.inference).is_model_enabled());
}

#[test]
#[serial]
fn test_summary_and_debug_never_show_credential() {
    clear_env();
    env::set_var("HUGGINGFACE_API_KEY", "hf_very_secret");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    let summary = config.summary();
    assert!(summary.contains("Inference API: Enabled"));
    assert!(!summary.contains("hf_very_secret"));
    assert!(!format!("{config:?}").contains("hf_very_secret"));
}

#[test]
#[serial]
fn test_malformed_values_are_rejected() {
    for (var, value) in [
        ("HTTP_PORT", "eighty"),
        ("INFERENCE_MAX_ATTEMPTS", "-1"),
        ("INFERENCE_MAX_WAIT_SECS", "-3"),
        ("DATABASE_URL", "mysql://localhost/recipes"),
    ] {
        clear_env();
        env::set_var(var, value);

        let err = ServerConfig::from_env().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "{var}={value}");
    }
    clear_env();
}

#[test]
#[serial]
fn test_blank_values_count_as_unset() {
    clear_env();
    env::set_var("HTTP_PORT", "   ");
    env::set_var("HUGGINGFACE_API_KEY", "");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 5000);
    assert!(config.inference.api_key.is_none());
}
