//! In-memory cliente store
//!
//! Backs tests and `STORE_BACKEND=memory` runs. Ids start at 1 and are never
//! reused.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Cliente, NewCliente};

use super::{ClienteFilter, ClienteStore, StoreError};

/// Cliente store kept in a `BTreeMap` keyed by id
#[derive(Debug)]
pub struct InMemoryClienteRepository {
    clientes: RwLock<BTreeMap<i64, Cliente>>,
    next_id: AtomicI64,
}

impl InMemoryClienteRepository {
    pub fn new() -> Self {
        Self {
            clientes: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryClienteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClienteStore for InMemoryClienteRepository {
    async fn insert(&self, cliente: NewCliente) -> Result<Cliente, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let cliente = cliente.into_cliente(id);

        self.clientes.write().await.insert(id, cliente.clone());

        Ok(cliente)
    }

    async fn find_all(&self) -> Result<Vec<Cliente>, StoreError> {
        Ok(self.clientes.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Cliente>, StoreError> {
        Ok(self.clientes.read().await.get(&id).cloned())
    }

    async fn find_all_edades(&self) -> Result<Vec<i32>, StoreError> {
        Ok(self.clientes.read().await.values().map(|c| c.edad).collect())
    }

    async fn average_edad(&self) -> Result<Option<f64>, StoreError> {
        let clientes = self.clientes.read().await;
        if clientes.is_empty() {
            return Ok(None);
        }

        let sum: f64 = clientes.values().map(|c| f64::from(c.edad)).sum();
        Ok(Some(sum / clientes.len() as f64))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.clientes.read().await.len() as i64)
    }

    async fn search(&self, filter: &ClienteFilter) -> Result<Vec<Cliente>, StoreError> {
        Ok(self
            .clientes
            .read()
            .await
            .values()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }
}
