//! Shared application state for the lookup API.

use std::sync::Arc;
use std::time::Duration;

use roster_db::UserStore;

/// Default upper bound on a single store lookup.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. Holds no
/// mutable data; the store handles its own connection pooling.
#[derive(Clone)]
pub struct AppState {
    /// Where user records come from.
    pub users: Arc<dyn UserStore>,
    /// Upper bound on a single store lookup.
    pub request_timeout: Duration,
}

impl AppState {
    /// Create application state around a user store.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Set the store lookup timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("request_timeout_ms", &self.request_timeout.as_millis())
            .finish_non_exhaustive()
    }
}
