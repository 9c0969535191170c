//! Repository module
//!
//! Persistence for clientes. Handlers and projections talk to the
//! [`ClienteStore`] trait; PostgreSQL backs it in production and an in-memory
//! map backs it in tests and local runs.

mod error;
mod memory;
mod postgres;

use async_trait::async_trait;

use crate::domain::{Cliente, NewCliente};

pub use error::StoreError;
pub use memory::InMemoryClienteRepository;
pub use postgres::PgClienteRepository;

/// Filter for cliente searches.
///
/// Each present field is a case-insensitive substring match; fields are
/// combined with AND. Blank fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClienteFilter {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
}

impl ClienteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = Some(nombre.into());
        self
    }

    pub fn with_apellido(mut self, apellido: impl Into<String>) -> Self {
        self.apellido = Some(apellido.into());
        self
    }

    /// Non-blank `nombre` filter
    pub fn nombre(&self) -> Option<&str> {
        non_blank(self.nombre.as_deref())
    }

    /// Non-blank `apellido` filter
    pub fn apellido(&self) -> Option<&str> {
        non_blank(self.apellido.as_deref())
    }

    /// Whether `cliente` satisfies every active filter.
    pub fn matches(&self, cliente: &Cliente) -> bool {
        contains_ignore_case(&cliente.nombre, self.nombre())
            && contains_ignore_case(&cliente.apellido, self.apellido())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

/// Cliente persistence.
///
/// Every method is a single read or write; implementations provide their own
/// isolation per call. Listing methods return clientes ordered by ascending
/// `id`.
#[async_trait]
pub trait ClienteStore: Send + Sync {
    /// Persist a new cliente and return it with its assigned id
    async fn insert(&self, cliente: NewCliente) -> Result<Cliente, StoreError>;

    /// All stored clientes
    async fn find_all(&self) -> Result<Vec<Cliente>, StoreError>;

    /// A single cliente, `None` when absent
    async fn find_by_id(&self, id: i64) -> Result<Option<Cliente>, StoreError>;

    /// Ages of all stored clientes
    async fn find_all_edades(&self) -> Result<Vec<i32>, StoreError>;

    /// Mean age computed by the store, `None` for an empty store
    async fn average_edad(&self) -> Result<Option<f64>, StoreError>;

    /// Number of stored clientes
    async fn count(&self) -> Result<i64, StoreError>;

    /// Clientes matching `filter`
    async fn search(&self, filter: &ClienteFilter) -> Result<Vec<Cliente>, StoreError>;
}
