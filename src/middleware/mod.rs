// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID generation, per-request spans and the CORS layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-origin resource sharing configuration
pub mod cors;
/// Request ID generation and per-request tracing spans
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{make_request_span, RequestIdGenerator, REQUEST_ID_HEADER};
