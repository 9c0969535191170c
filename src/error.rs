//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::{DomainError, FieldViolation};
use crate::repository::StoreError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Cliente no encontrado con ID: {0}")]
    ClienteNotFound(i64),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Server errors (5xx)
    #[error("Error al {operation}: {source}")]
    Store {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wrap a store failure with the operation that triggered it
    pub fn store(operation: &'static str, source: StoreError) -> Self {
        AppError::Store { operation, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ClienteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Domain(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Domain(_) | AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldViolation>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (error_code, details, violations) = match &self {
            // 400 Bad Request
            AppError::InvalidRequest(msg) => ("invalid_request", Some(msg.clone()), Vec::new()),
            AppError::Domain(DomainError::Validation(errors)) => (
                "validation_error",
                Some(errors.to_string()),
                errors.violations().to_vec(),
            ),

            // 404 Not Found
            AppError::ClienteNotFound(id) => ("cliente_not_found", Some(id.to_string()), Vec::new()),

            // 500 Internal Server Error: the message is part of the contract
            AppError::Domain(err) => {
                tracing::error!("Domain error: {}", err);
                ("internal_error", Some(err.to_string()), Vec::new())
            }
            AppError::Store { operation, source } => {
                tracing::error!(operation = %operation, "Store error: {:?}", source);
                ("store_error", Some(source.to_string()), Vec::new())
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
            violations,
        };

        (status, Json(body)).into_response()
    }
}
