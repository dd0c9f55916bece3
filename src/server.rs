// ABOUTME: HTTP server assembly and lifecycle for the recipe catalog
// ABOUTME: Applies middleware layers, serves the router and closes the store on graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # HTTP Server
//!
//! Layer order, outermost first: panic recovery, request id assignment,
//! request tracing, request id propagation to the response, CORS.

use crate::middleware::{http_trace_layer, setup_cors, MakeRequestUuid};
use crate::resources::ServerResources;
use crate::routes::build_router;
use anyhow::{Context, Result};
use axum::{
    response::{IntoResponse, Response},
    Router,
};
use recipe_core::errors::AppError;
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::{info, warn};

/// Router with every middleware layer applied
pub fn app(resources: &Arc<ServerResources>) -> Router {
    build_router(resources)
        .layer(setup_cors(&resources.config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(http_trace_layer())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Turn a handler panic into the generic 500 envelope
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    AppError::internal(format!("Handler panicked: {detail}")).into_response()
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {address}"))?;
    serve(listener, resources).await
}

/// Serve on an already bound listener, closing the store after shutdown
///
/// # Errors
///
/// Returns an error if the server fails while running
pub async fn serve(listener: TcpListener, resources: Arc<ServerResources>) -> Result<()> {
    let local_addr = listener.local_addr().context("Listener has no local address")?;
    info!(address = %local_addr, "HTTP server listening");

    axum::serve(listener, app(&resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    resources.store.close().await;
    info!("HTTP server stopped, document store closed");
    Ok(())
}

/// Resolve on Ctrl+C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
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
        () = ctrl_c => {},
        () = terminate => {},
    }
}
