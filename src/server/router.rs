//! Route table for the merge service

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::server::{handlers, SharedState};

/// Build the axum router with all endpoints.
///
/// The body limit is the upstream guard for the 50MB upload cap: the
/// workflow never sees an oversized request.
pub fn build_router(state: SharedState, config: &ServiceConfig) -> Router {
    Router::new()
        .route("/api/status", get(handlers::status_handler))
        .route("/api/merge", post(handlers::merge_upload_handler))
        .route("/api/merge/remote", post(handlers::merge_remote_handler))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
