//! HTTP router construction.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use routewatch_core::config::ServerConfig;

use crate::api;
use crate::state::AppState;

/// Build the application router with all routes and CORS middleware.
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/traffic/add", post(api::watch_add))
        .route("/traffic/all", get(api::watch_list))
        .layer(cors_layer(config))
        .with_state(state)
}

/// Restrict CORS to the configured frontend origin; permissive when unset.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    match config.cors_origin.as_deref() {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => CorsLayer::new()
                .allow_origin(value)
                .allow_methods(Any)
                .allow_headers(Any),
            Err(_) => {
                warn!(%origin, "invalid CORS_ORIGIN, falling back to permissive CORS");
                CorsLayer::permissive()
            }
        },
        None => CorsLayer::permissive(),
    }
}
