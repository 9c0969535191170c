//! Projection Service
//!
//! Read side: assembles the views returned by the query endpoints. Nothing
//! here is cached; every call reads the store fresh.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{fecha_probable_muerte, Cliente, Clock, KpiClientes, RandomSource};
use crate::error::AppError;
use crate::repository::{ClienteFilter, ClienteStore};

/// Public list view of a cliente, with the derived probable death date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteView {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub edad: i32,
    pub fecha_nacimiento: NaiveDate,
    pub fecha_probable_muerte: NaiveDate,
}

impl ClienteView {
    fn new(cliente: Cliente, fecha_probable_muerte: NaiveDate) -> Self {
        Self {
            id: cliente.id,
            nombre: cliente.nombre,
            apellido: cliente.apellido,
            edad: cliente.edad,
            fecha_nacimiento: cliente.fecha_nacimiento,
            fecha_probable_muerte,
        }
    }
}

/// Projection Service for cliente queries
#[derive(Clone)]
pub struct ProjectionService {
    store: Arc<dyn ClienteStore>,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl ProjectionService {
    /// Create a new ProjectionService
    pub fn new(
        store: Arc<dyn ClienteStore>,
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            store,
            clock,
            random,
        }
    }

    /// Mean and standard deviation of every stored age
    pub async fn kpis(&self) -> Result<KpiClientes, AppError> {
        let edades = self
            .store
            .find_all_edades()
            .await
            .map_err(|e| AppError::store("obtener KPIs", e))?;

        let kpis = KpiClientes::from_edades(&edades);

        tracing::debug!(
            clientes = edades.len(),
            promedio_edad = kpis.promedio_edad,
            desviacion_estandar = kpis.desviacion_estandar,
            "KPIs computed"
        );

        Ok(kpis)
    }

    /// Every cliente with a freshly drawn probable death date.
    ///
    /// The derived date is recomputed on each call, so it changes between
    /// calls for the same cliente.
    pub async fn list_clientes(&self) -> Result<Vec<ClienteView>, AppError> {
        let clientes = self
            .store
            .find_all()
            .await
            .map_err(|e| AppError::store("obtener lista de clientes", e))?;

        let today = self.clock.today();

        clientes
            .into_iter()
            .map(|cliente| -> Result<ClienteView, AppError> {
                let fecha = fecha_probable_muerte(cliente.edad, today, self.random.as_ref())?;
                Ok(ClienteView::new(cliente, fecha))
            })
            .collect()
    }

    /// Raw stored cliente, without derived fields
    pub async fn get_cliente(&self, id: i64) -> Result<Cliente, AppError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| AppError::store("obtener cliente", e))?
            .ok_or(AppError::ClienteNotFound(id))
    }

    /// Clientes matching `filter`, without derived fields
    pub async fn search(&self, filter: &ClienteFilter) -> Result<Vec<Cliente>, AppError> {
        self.store
            .search(filter)
            .await
            .map_err(|e| AppError::store("buscar clientes", e))
    }

    /// Mean age as reported by the store itself
    pub async fn average_edad(&self) -> Result<Option<f64>, AppError> {
        self.store
            .average_edad()
            .await
            .map_err(|e| AppError::store("obtener promedio de edad", e))
    }
}
