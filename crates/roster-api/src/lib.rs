//! Lookup API server for the Roster service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - `GET /users/{username}` -- exact-match user lookup
//!   (200 with the record, 404 with an empty body, 500 with `{"message"}`)
//! - `GET /health` -- liveness check that does not touch the store
//!
//! # Architecture
//!
//! Handlers hold no state of their own. Each lookup request makes exactly
//! one call through the [`UserStore`](roster_db::UserStore) trait object in
//! [`AppState`], bounded by the configured request timeout, and translates
//! the outcome into a response.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, ctrl_c, start_server};
pub use state::AppState;
