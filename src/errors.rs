// errors.rs
use std::fmt;

/// Errors from the billing store layer (connection handling, schema init,
/// queries). The search pipeline never surfaces these to callers; it logs
/// them and leaves the affected fields at their sentinels.
#[derive(Debug)]
pub enum StoreError {
    DbError(String),
    InternalError,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DbError(msg) => write!(f, "Database Error: {msg}"),
            StoreError::InternalError => write!(f, "Internal Error"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::DbError(e.to_string())
    }
}
