//! HTTP route handlers for the album API.
//!
//! - `albums`: list, create and fetch album records
//! - `health`: liveness, readiness, metrics and version endpoints

pub mod albums;
pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::security_headers::security_headers_middleware;
use crate::state::AppState;

/// Album payloads are tiny; anything past this is rejected before parsing.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Builds the full router with all routes and layers applied.
pub fn app(state: AppState) -> Router {
    let cfg = state.config.clone();

    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/metrics", get(health::metrics))
        .route("/version", get(health::version))
        .route("/albums", get(albums::list_albums).post(albums::create_album))
        .route("/albums/{id}", get(albums::get_album))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn_with_state(cfg, security_headers_middleware))
}
