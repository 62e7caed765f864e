use dine_error::DineResult;
use dine_models::settings::{DbConfig, Sqlite};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{info, instrument, log::LevelFilter};

/// Idle timeout and max lifetime of the pooled `:memory:` connection.
///
/// Retiring that connection would discard the whole database, so it is kept
/// for as long as the process can run.
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(u32::MAX as u64);

/// Initialize the SQLite connection pool.
#[instrument(name = "init-sqlite-db", skip_all)]
pub async fn init_db(config: &Sqlite) -> DineResult<DatabaseConnection> {
    if let Some(dir) = config.db_dir() {
        tokio::fs::create_dir_all(&dir).await?;
    }

    info!(
        "Connecting to SQLite database at: {} (auto_create: {})",
        config.db_path(),
        config.auto_create
    );

    let db = Database::connect(connect_options(config)).await?;
    info!("Successfully connected to SQLite database");

    Ok(db)
}

/// Pool options for `config`.
///
/// A `:memory:` database lives inside a single connection, so the pool is
/// pinned to exactly one connection that is never reaped.
pub(crate) fn connect_options(config: &Sqlite) -> ConnectOptions {
    let mut opts = ConnectOptions::new(config.to_url());
    opts.connect_timeout(Duration::from_millis(config.timeout));

    if config.is_memory() {
        opts.max_connections(1)
            .min_connections(1)
            .idle_timeout(MEMORY_CONNECTION_LIFETIME)
            .max_lifetime(MEMORY_CONNECTION_LIFETIME);
    } else {
        opts.idle_timeout(Duration::from_millis(config.idle_timeout))
            .max_lifetime(Duration::from_millis(config.max_lifetime))
            .max_connections(config.max_connections);
    }

    #[cfg(debug_assertions)]
    {
        opts.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    }
    #[cfg(not(debug_assertions))]
    {
        opts.sqlx_logging(false)
            .sqlx_logging_level(LevelFilter::Off);
    }

    opts
}
