//! Store Errors
//!
//! Error types for cliente persistence.

/// Errors that can occur in a cliente store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store cannot serve requests
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
