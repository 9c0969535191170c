//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use chrono::NaiveDate;
use thiserror::Error;

use super::validation::ValidationErrors;

/// Domain-specific errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// One or more field checks failed
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Date arithmetic left the representable calendar range
    #[error("Date out of range: {date} plus {years} years")]
    DateOutOfRange { date: NaiveDate, years: i32 },
}

impl DomainError {
    /// Check if this is a client error (caller's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
