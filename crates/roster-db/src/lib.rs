//! Document store client for the Roster user lookup service.
//!
//! `PostgreSQL` is used as a schema-less document store: every document is a
//! JSONB value tagged with the collection it belongs to. This crate owns the
//! connection pool and the single read path the service needs, a
//! single-field equality lookup.
//!
//! # Architecture
//!
//! ```text
//! GET /users/{username}
//!     |
//!     +-- UserStore::find_user_by_username   (trait seam, mockable)
//!         |
//!         +-- PgUserStore --> DocumentStore::find_one --> StorePool (PgPool)
//! ```
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`document_store`] -- Collection-scoped equality lookups over JSONB
//! - [`user_store`] -- The [`UserStore`] trait and its `PostgreSQL` backing
//! - [`error`] -- Shared error types

pub mod document_store;
pub mod error;
pub mod postgres;
pub mod user_store;

// Re-export primary types for convenience.
pub use document_store::{Document, DocumentStore};
pub use error::DbError;
pub use postgres::{StoreConfig, StorePool};
pub use user_store::{PgUserStore, UserStore};
