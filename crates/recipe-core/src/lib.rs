// ABOUTME: Core types for the Recipe Explorer service
// ABOUTME: Foundation crate with error handling and recipe domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types for the Recipe Explorer service.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Recipe records and the request shapes that create or patch them

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Recipe domain models
pub mod models;
