// ABOUTME: HTTP server assembly combining all route groups with shared middleware
// ABOUTME: Builds the axum router and serves it until a shutdown signal arrives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::middleware::{make_request_span, setup_cors, RequestIdGenerator, REQUEST_ID_HEADER};
use crate::resources::ServerResources;
use crate::routes::{AssistantRoutes, HealthRoutes, RecipeRoutes};
use axum::body::Body;
use axum::Router;
use http::HeaderName;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the full application router
///
/// Layers run outside-in: request id assignment, tracing, id propagation to
/// the response, then CORS.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(AssistantRoutes::routes(resources))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    request_id_header.clone(),
                    RequestIdGenerator,
                ))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
                .layer(PropagateRequestIdLayer::new(request_id_header))
                .layer(cors),
        )
}

/// Bind the configured address and serve until Ctrl+C (or SIGTERM on Unix)
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn serve(resources: Arc<ServerResources>) -> AppResult<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {address}: {e}")))?;

    info!("HTTP server listening on http://{address}");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
