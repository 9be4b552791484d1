use std::path::PathBuf;

use thiserror::Error;

use snipstash_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Invalid(#[from] CoreError),

    #[error("sqlite error: path={path:?}, cause={cause}")]
    Sqlite { path: PathBuf, cause: String },

    #[error("timestamp error: {0}")]
    Timestamp(#[from] jiff::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

// Loses path context. Prefer explicit map_err with path when available.
impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Sqlite {
            path: PathBuf::new(),
            cause: e.to_string(),
        }
    }
}
