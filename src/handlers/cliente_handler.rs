//! Cliente Creation Handler
//!
//! Validates and persists new clientes.

use std::sync::Arc;

use crate::domain::{Cliente, Clock, DomainError};
use crate::error::AppError;
use crate::repository::ClienteStore;

use super::CreateClienteCommand;

/// Handler for cliente creation
pub struct CreateClienteHandler {
    store: Arc<dyn ClienteStore>,
    clock: Arc<dyn Clock>,
}

impl CreateClienteHandler {
    pub fn new(store: Arc<dyn ClienteStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Execute the create cliente command
    ///
    /// Nothing is written when validation fails.
    pub async fn execute(&self, command: CreateClienteCommand) -> Result<Cliente, AppError> {
        let today = self.clock.today();

        let new_cliente = command.validate(today).map_err(|errors| {
            tracing::debug!(violations = %errors, "Rejected cliente creation");
            AppError::Domain(DomainError::Validation(errors))
        })?;

        let cliente = self
            .store
            .insert(new_cliente)
            .await
            .map_err(|e| AppError::store("crear cliente", e))?;

        tracing::info!(
            cliente_id = cliente.id,
            edad = cliente.edad,
            "Cliente created"
        );

        Ok(cliente)
    }
}
