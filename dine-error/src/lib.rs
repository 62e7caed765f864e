pub mod init;
pub mod storage;
pub mod web;

use anyhow::Error as AnyhowError;
use config::ConfigError;
use init::InitContextError;
use sea_orm::DbErr;
use std::io::Error as IoError;
use storage::StorageError;
use thiserror::Error;
use tokio::task::JoinError;
use web::WebError;

pub type DineResult<T, E = DineError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;

#[derive(Error, Debug)]
pub enum DineError {
    #[error("{0}")]
    JoinError(#[from] JoinError),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    InitContextError(#[from] InitContextError),
    #[error("{0}")]
    WebError(#[from] WebError),
}

impl From<String> for DineError {
    #[inline]
    fn from(e: String) -> Self {
        DineError::Msg(e)
    }
}

impl From<&str> for DineError {
    #[inline]
    fn from(e: &str) -> Self {
        DineError::Msg(e.to_string())
    }
}

impl From<DbErr> for DineError {
    #[inline]
    fn from(e: DbErr) -> Self {
        DineError::StorageError(StorageError::DBError(e))
    }
}
