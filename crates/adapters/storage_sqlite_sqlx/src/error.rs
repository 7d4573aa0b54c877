//! Storage-specific error type wrapping sqlx errors.

use haven_domain::error::HavenError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to deserialize a stored status value.
    #[error("JSON deserialization error")]
    Json(#[from] serde_json::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for HavenError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
