// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven server, database and inference configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables; see [`environment::ServerConfig`].

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CorsConfig, DatabaseConfig, DatabaseUrl, Environment, InferenceConfig, ServerConfig,
};
