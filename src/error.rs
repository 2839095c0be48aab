use thiserror::Error;

/// Failures reaching the browser's key-value storage. None of these are
/// fatal: callers log them and carry on with in-memory state.
#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
}
