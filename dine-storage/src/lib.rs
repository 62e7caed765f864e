mod migration;
mod sql;

use async_trait::async_trait;
use dine_error::{init::InitContextError, storage::StorageError, DineResult};
use dine_models::{settings::Settings, DbManager};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use sql::sqlite;
use std::sync::Arc;
use tracing::{info, instrument};

/// Database manager owning the SQLite connection pool
pub struct DineDbManager {
    db_conn: Option<DatabaseConnection>,
}

#[async_trait]
impl DbManager for DineDbManager {
    #[inline]
    #[instrument(name = "init-db-manager", skip_all)]
    async fn init(settings: &Settings) -> DineResult<Arc<Self>, InitContextError> {
        let db = sqlite::init_db(&settings.db.sqlite).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to init SQLite database: {e}"))
        })?;

        Migrator::up(&db, None).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to migrate SQLite database: {e}"))
        })?;

        info!("Database manager initialized successfully");
        Ok(Arc::new(DineDbManager { db_conn: Some(db) }))
    }

    #[inline]
    fn get_connection(&self) -> DineResult<DatabaseConnection, StorageError> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[inline]
    #[instrument(name = "db-close", skip_all)]
    async fn close(&self) -> DineResult<()> {
        info!("Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("Database connections closed");
        Ok(())
    }
}
