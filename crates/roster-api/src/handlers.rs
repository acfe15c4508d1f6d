//! REST endpoint handlers for the lookup API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/users/:username` | Exact-match user lookup |
//! | `GET` | `/health` | Liveness check |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{debug, error, warn};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /users/:username -- single user lookup
// ---------------------------------------------------------------------------

/// Look a user up by username.
///
/// The path segment is passed to the store verbatim: no trimming, no case
/// folding, no validation.
///
/// - found: `200` with `{id, username, email}`
/// - not found: `404` with an empty body
/// - store failure or timeout: `500` with `{"message": "..."}`
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Response, ApiError> {
    let lookup = state.users.find_user_by_username(&username);

    let Ok(outcome) = tokio::time::timeout(state.request_timeout, lookup).await else {
        let timeout_ms = u64::try_from(state.request_timeout.as_millis()).unwrap_or(u64::MAX);
        warn!(username, timeout_ms, "User lookup timed out");
        return Err(ApiError::Timeout { timeout_ms });
    };

    match outcome {
        Ok(Some(user)) => {
            debug!(username, "User lookup hit");
            Ok((StatusCode::OK, Json(user)).into_response())
        }
        Ok(None) => {
            debug!(username, "User lookup miss");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
        Err(e) => {
            error!(username, error = %e, "User lookup failed");
            Err(ApiError::Store(e))
        }
    }
}

// ---------------------------------------------------------------------------
// GET /health -- liveness
// ---------------------------------------------------------------------------

/// Report that the process is up. Does not touch the store.
#[allow(clippy::unused_async)] // axum handlers are async functions
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
