use clap::Parser;
use dine_common::{shutdown_signal, Logger};
use dine_error::{DineError, DineResult};
use dine_models::{constants::DEFAULT_CONFIG_FILE_NAME, settings::Settings, DbManager, WebServer};
use dine_storage::DineDbManager;
use dine_web::DineWebServer;
use std::{env::current_dir, path::PathBuf};
use tracing::{error, info};

/// Dine - restaurant ordering service
///
/// Serves the order detail (line item) API over HTTP, backed by SQLite.
#[derive(Parser)]
#[command(name = "dine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dine order service", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, the service looks for 'dine.toml'
    /// in the current working directory.
    #[arg(short, long, env = "DINE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> DineResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| DineError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let settings = Settings::new(config_path.to_string_lossy().to_string())?;

    let mut logger = Logger::new(
        Some(Logger::parse_level(&settings.general.log_level)),
        settings.general.log_dir.clone(),
    );
    logger.initialize()?;
    info!(config = %config_path.display(), "Starting dine");

    let db_manager = DineDbManager::init(&settings).await?;
    let web_server = DineWebServer::init(&settings, db_manager.get_connection()?).await?;
    info!(
        "Listening on {}:{}{}",
        settings.web.host, settings.web.port, settings.web.router_prefix
    );

    if let Err(e) = shutdown_signal().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }

    web_server.stop().await?;
    db_manager.close().await?;
    info!("Shutdown complete");
    Ok(())
}
