//! HTTP layer of the dine service: order detail controller, routes and server
pub mod api;
pub mod controller;
mod middleware;

use actix_web::{
    dev::{Server, ServerHandle},
    middleware::{Compress, Logger, NormalizePath},
    web::{self, Data},
    App, HttpServer,
};
use actix_web_validator::{JsonConfig, PathConfig, QueryConfig};
use async_trait::async_trait;
use dine_error::{
    init::InitContextError, storage::StorageError, web::WebError, DineError, DineResult,
    WebResult,
};
use dine_models::{settings::Settings, WebServer};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{error, info, instrument};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    writer: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Open a read-only request-scoped unit of work.
    pub async fn begin(&self) -> WebResult<DatabaseTransaction> {
        Ok(self.db.begin().await.map_err(StorageError::from)?)
    }

    /// Open a request-scoped unit of work that writes.
    ///
    /// SQLite admits one writer at a time, and a deferred transaction that
    /// has already read cannot wait for the write lock: it fails at once with
    /// `database is locked`. Writers therefore queue on a single lock, held
    /// until the returned guard is dropped, which must outlive the transaction.
    pub async fn begin_write(&self) -> WebResult<(OwnedMutexGuard<()>, DatabaseTransaction)> {
        let guard = Arc::clone(&self.writer).lock_owned().await;
        let txn = self.begin().await?;
        Ok((guard, txn))
    }
}

/// Register extractor configs, public routes and API routes under `router_prefix`.
pub fn configure(cfg: &mut web::ServiceConfig, router_prefix: &str) {
    cfg.app_data(
        JsonConfig::default()
            .error_handler(|err, _| WebError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        PathConfig::default()
            .error_handler(|err, _| WebError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        QueryConfig::default()
            .error_handler(|err, _| WebError::BadRequest(err.to_string()).into()),
    )
    .configure(api::configure_public_routes)
    .service(web::scope(router_prefix).configure(api::configure_routes));
}

/// DineWebServer handles the web server initialization and management
#[derive(Clone)]
pub struct DineWebServer {
    /// Server handle for graceful shutdown
    server: Arc<Mutex<Option<ServerHandle>>>,
}

impl DineWebServer {
    fn create_server(settings: &Settings, db: DatabaseConnection) -> DineResult<Server> {
        let addr = format!("{}:{}", settings.web.host, settings.web.port);
        let router_prefix = settings.web.router_prefix.clone();
        let worker_count = settings.web.get_worker_count();
        let cors_config = settings.web.cors.clone();
        let state = Arc::new(AppState::new(db));

        let server = HttpServer::new(move || {
            App::new()
                .app_data(Data::new(Arc::clone(&state)))
                .wrap(middleware::cors::middleware(&cors_config))
                .wrap(Logger::default())
                .wrap(Compress::default())
                .wrap(NormalizePath::trim())
                .configure(|cfg| configure(cfg, &router_prefix))
        })
        .workers(worker_count)
        .bind(&addr)
        .map_err(|e| DineError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

        info!(%addr, workers = worker_count, "HTTP server bound");
        Ok(server.run())
    }
}

#[async_trait]
impl WebServer for DineWebServer {
    #[inline]
    #[instrument(name = "init-web-server", skip_all)]
    async fn init(
        settings: &Settings,
        db: DatabaseConnection,
    ) -> DineResult<Arc<Self>, InitContextError> {
        let server = Self::create_server(settings, db).map_err(|e| {
            InitContextError::Primitive(format!("Failed to create web server: {e}"))
        })?;
        let server_handle = server.handle();

        tokio::spawn(async move {
            if let Err(e) = server.await {
                error!(error=%e, "Web server failed");
            }
        });

        Ok(Arc::new(DineWebServer {
            server: Arc::new(Mutex::new(Some(server_handle))),
        }))
    }

    #[inline]
    #[instrument(name = "web-server-stop", skip_all)]
    async fn stop(&self) -> DineResult<()> {
        info!("Stopping web server...");
        let mut server_guard = self.server.lock().await;
        if let Some(handle) = server_guard.take() {
            handle.stop(true).await;
        }
        info!("Web server stopped");
        Ok(())
    }
}
