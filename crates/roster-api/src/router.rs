//! Axum router construction for the lookup API.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the lookup server.
///
/// The router includes:
/// - `GET /users/:username` -- single user lookup
/// - `GET /health` -- liveness check
///
/// Every request is traced via [`TraceLayer`].
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users/{username}", get(handlers::get_user))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
