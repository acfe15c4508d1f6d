//! Service binary for the Roster user lookup service.
//!
//! Wires configuration, logging, the document store pool, and the HTTP
//! server together, then serves `GET /users/{username}` until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `roster-config.yaml` (or `$ROSTER_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Connect the document store pool and apply migrations
//! 4. Serve HTTP until a shutdown signal arrives
//! 5. Close the pool

mod error;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use roster_api::{AppState, ServerConfig};
use roster_core::{LoggingConfig, RosterConfig};
use roster_db::{PgUserStore, StoreConfig, StorePool};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "roster-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, the store connection, or the HTTP
/// server fails.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Config first: the log level comes from it.
    let config = load_config()?;
    init_logging(&config.logging);

    info!(
        database = config.store.database,
        port = config.server.port,
        request_timeout_ms = config.server.request_timeout_ms,
        "roster-server starting"
    );

    let store_config = StoreConfig::new(&config.store.url, &config.store.database)
        .with_max_connections(config.store.max_connections)
        .with_connect_timeout(Duration::from_secs(config.store.connect_timeout_secs));
    let pool = StorePool::connect(&store_config).await?;
    if config.store.run_migrations {
        pool.run_migrations().await?;
    }

    let users = Arc::new(PgUserStore::new(pool.clone()));
    let state = Arc::new(
        AppState::new(users).with_request_timeout(config.server.request_timeout()),
    );
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    let served = roster_api::start_server(&server_config, state, roster_api::ctrl_c()).await;
    pool.close().await;
    served?;

    info!("roster-server stopped");
    Ok(())
}

/// Load configuration from `$ROSTER_CONFIG` or `roster-config.yaml`.
///
/// A missing file is not an error: defaults are used, with environment
/// overrides applied.
fn load_config() -> Result<RosterConfig, AppError> {
    let path = std::env::var_os("ROSTER_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        Ok(RosterConfig::from_file(&path)?)
    } else {
        let mut config = RosterConfig::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
