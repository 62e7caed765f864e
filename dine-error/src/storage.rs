use sea_orm::{DbErr, RuntimeErr};
use thiserror::Error;

#[derive(Error, Debug, Default)]
pub enum StorageError {
    #[error("database unavailable")]
    #[default]
    StorageUnavailable,

    #[error("database error: `{0}`")]
    DBError(#[from] DbErr),
}

impl StorageError {
    /// Driver-level description of the failure.
    ///
    /// For database errors this is the message reported by the SQL driver
    /// (e.g. `FOREIGN KEY constraint failed`) rather than the ORM wrapper text.
    pub fn detail(&self) -> String {
        match self {
            StorageError::DBError(e) => db_err_detail(e),
            other => other.to_string(),
        }
    }
}

fn db_err_detail(e: &DbErr) -> String {
    match e {
        DbErr::Conn(rt) | DbErr::Exec(rt) | DbErr::Query(rt) => runtime_err_detail(rt),
        other => other.to_string(),
    }
}

fn runtime_err_detail(rt: &RuntimeErr) -> String {
    match rt {
        RuntimeErr::SqlxError(e) => e
            .as_database_error()
            .map(|db| db.message().to_string())
            .unwrap_or_else(|| e.to_string()),
        RuntimeErr::Internal(msg) => msg.clone(),
    }
}
