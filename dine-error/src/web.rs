use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
}

/// Store failures are client errors carrying the driver message.
///
/// Missing rows never travel through here: callers build `NotFound` from an
/// empty lookup, so a 404 cannot turn into a 400.
impl From<StorageError> for WebError {
    fn from(e: StorageError) -> Self {
        WebError::BadRequest(e.detail())
    }
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(json!({
            "error": status.canonical_reason().unwrap_or_default(),
            "message": self.to_string(),
        }))
    }
}
