//! Configuration for the Roster user lookup service.
//!
//! # Modules
//!
//! - [`config`] -- Loading `roster-config.yaml` into strongly-typed structs,
//!   with environment-variable overrides for deployment.

pub mod config;

pub use config::{ConfigError, LoggingConfig, RosterConfig, ServerSection, StoreSection};
