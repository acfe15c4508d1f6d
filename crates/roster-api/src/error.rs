//! Error types for the lookup API.
//!
//! [`ApiError`] covers every way a lookup can fail and converts into an
//! Axum HTTP response via its [`IntoResponse`] implementation. A user that
//! does not exist is not an error; handlers answer 404 directly.
//!
//! Failure bodies echo the cause as `{"message": "..."}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_db::DbError;

/// Errors that can occur while serving a lookup.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The store reported a failure.
    #[error(transparent)]
    Store(#[from] DbError),

    /// The store did not answer within the request timeout.
    #[error("store lookup timed out after {timeout_ms}ms")]
    Timeout {
        /// The deadline that was exceeded, in milliseconds.
        timeout_ms: u64,
    },
}

impl ApiError {
    /// HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(_) | Self::Timeout { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "message": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn store_failure_echoes_message() {
        let err = ApiError::from(DbError::Unavailable("Something went wrong!".to_owned()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Something went wrong!"})
        );
    }

    #[tokio::test]
    async fn timeout_names_the_deadline() {
        let response = ApiError::Timeout { timeout_ms: 250 }.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["message"],
            "store lookup timed out after 250ms"
        );
    }

    #[test]
    fn config_error_keeps_its_prefix() {
        let err = ApiError::from(DbError::Config("bad url".to_owned()));
        assert_eq!(err.to_string(), "Configuration error: bad url");
    }
}
