use thiserror::Error;

/// Error type for startup wiring (storage, web server)
#[derive(Error, Debug)]
pub enum InitContextError {
    /// Returned when a primitive error occurs
    #[error("primitive error: {0}")]
    Primitive(String),
}
