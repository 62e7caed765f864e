//! Process-level plumbing shared by the dine binaries: logging and shutdown.
mod logger;

pub use dine_error::{DineError, DineResult};
pub use logger::Logger;

#[cfg(windows)]
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

/// Resolves once the process is asked to stop (SIGINT/SIGTERM, or Ctrl-C on Windows).
#[cfg(unix)]
pub async fn shutdown_signal() -> DineResult<()> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::select! {
        _ = sigint.recv() => info!("Received SIGINT"),
        _ = sigterm.recv() => info!("Received SIGTERM"),
    }
    Ok(())
}

#[cfg(windows)]
pub async fn shutdown_signal() -> DineResult<()> {
    ctrl_c().await?;
    info!("Received Ctrl-C");
    Ok(())
}
