//! Shared type definitions for the Roster user lookup service.
//!
//! # Modules
//!
//! - [`ids`] -- Store-assigned document identifiers
//! - [`user`] -- The `User` record served by the lookup endpoint

pub mod ids;
pub mod user;

// Re-export all public types at crate root for convenience.
pub use ids::DocumentId;
pub use user::{User, USERNAME_FIELD, USERS_COLLECTION};
