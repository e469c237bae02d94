// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates request IDs and creates one span per HTTP request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates `req_<uuid>` ids for requests that arrive without one
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdGenerator;

impl MakeRequestId for RequestIdGenerator {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&format!("req_{}", Uuid::new_v4().simple()))
            .ok()
            .map(RequestId::new)
    }
}

/// Span factory for `TraceLayer`
///
/// Runs after the request id layer, so the header is always present unless
/// the client sent a non-ASCII value.
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_prefixed_and_unique() {
        let request = Request::builder().body(()).unwrap();
        let mut generator = RequestIdGenerator;

        let first = generator.make_request_id(&request).unwrap();
        let second = generator.make_request_id(&request).unwrap();

        let first = first.header_value().to_str().unwrap().to_owned();
        assert!(first.starts_with("req_"));
        assert_ne!(first, second.header_value().to_str().unwrap());
    }
}
