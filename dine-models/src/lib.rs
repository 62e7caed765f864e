pub mod constants;
pub mod domain;
pub mod entities;
mod idens;
pub mod initializer;
pub mod settings;
pub mod web;

use async_trait::async_trait;
use dine_error::{init::InitContextError, storage::StorageError, DineResult};
use sea_orm::DatabaseConnection;
use settings::Settings;
use std::sync::Arc;

/// Database management interface.
///
/// Owns the connection pool; request handlers borrow connections from it
/// and open one transaction per request.
#[async_trait]
pub trait DbManager: Send + Sync + 'static {
    /// Connects to the configured database and brings the schema up to date.
    async fn init(settings: &Settings) -> DineResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Retrieves a handle to the connection pool.
    fn get_connection(&self) -> DineResult<DatabaseConnection, StorageError>;

    /// Gracefully closes all database connections.
    async fn close(&self) -> DineResult<()>;
}

/// HTTP server interface.
#[async_trait]
pub trait WebServer: Send + Sync + 'static {
    /// Binds and starts serving in the background.
    async fn init(
        settings: &Settings,
        db: DatabaseConnection,
    ) -> DineResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Gracefully stops the server, draining in-flight requests.
    async fn stop(&self) -> DineResult<()>;
}
