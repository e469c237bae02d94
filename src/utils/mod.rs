// ABOUTME: Utility module for shared helper functionality
// ABOUTME: Currently hosts HTTP client construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Shared HTTP client construction
pub mod http_client;
