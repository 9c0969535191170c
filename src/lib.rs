//! cliente_service Library
//!
//! Re-exports modules for the server binary and integration testing.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod projection;
pub mod repository;

mod error;

pub use api::AppState;
pub use config::{Config, StoreBackend};
pub use domain::{Cliente, DomainError, KpiClientes, NewCliente};
pub use error::{AppError, AppResult, ErrorResponse};
pub use repository::{ClienteStore, InMemoryClienteRepository, PgClienteRepository, StoreError};
