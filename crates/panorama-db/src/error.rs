//! Storage-layer error types and conversions.

use panorama_core::PanoramaError;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("query failed: {0}")]
    Query(String),

    #[error("migration failed: {0}")]
    Migration(String),

    #[error("blob io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("blob decode error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<DbError> for PanoramaError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Io(e) => PanoramaError::Storage(e.to_string()),
            DbError::Json(e) => PanoramaError::Storage(e.to_string()),
            other => PanoramaError::Backend(other.to_string()),
        }
    }
}
