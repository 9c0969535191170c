//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{Cliente, KpiClientes};
use crate::error::AppError;
use crate::handlers::CreateClienteCommand;
use crate::projection::ClienteView;
use crate::repository::ClienteFilter;

use super::AppState;

// =========================================================================
// Request/Response types
// =========================================================================

/// Body of `POST /creacliente`.
///
/// Every field is optional at the decoding stage so missing values surface as
/// validation errors rather than decoding failures.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteRequest {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido: Option<String>,
    #[serde(default)]
    pub edad: Option<i32>,
    #[serde(default)]
    pub fecha_nacimiento: Option<NaiveDate>,
}

impl From<ClienteRequest> for CreateClienteCommand {
    fn from(request: ClienteRequest) -> Self {
        CreateClienteCommand {
            nombre: request.nombre,
            apellido: request.apellido,
            edad: request.edad,
            fecha_nacimiento: request.fecha_nacimiento,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BuscarQuery {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido: Option<String>,
}

impl From<BuscarQuery> for ClienteFilter {
    fn from(query: BuscarQuery) -> Self {
        ClienteFilter {
            nombre: query.nombre,
            apellido: query.apellido,
        }
    }
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/creacliente", post(create_cliente))
        .route("/kpideclientes", get(get_kpis))
        .route("/listclientes", get(list_clientes))
        .route("/cliente/:id", get(get_cliente))
        .route("/clientes/buscar", get(search_clientes))
}

// =========================================================================
// POST /creacliente
// =========================================================================

/// Create a new cliente
async fn create_cliente(
    State(state): State<AppState>,
    payload: Result<Json<ClienteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Cliente>), AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let cliente = state.create_handler().execute(request.into()).await?;

    Ok((StatusCode::CREATED, Json(cliente)))
}

// =========================================================================
// GET /kpideclientes
// =========================================================================

/// Mean age and standard deviation across every cliente
async fn get_kpis(State(state): State<AppState>) -> Result<Json<KpiClientes>, AppError> {
    let kpis = state.projection().kpis().await?;

    Ok(Json(kpis))
}

// =========================================================================
// GET /listclientes
// =========================================================================

/// List every cliente with its probable death date
async fn list_clientes(State(state): State<AppState>) -> Result<Json<Vec<ClienteView>>, AppError> {
    let clientes = state.projection().list_clientes().await?;

    Ok(Json(clientes))
}

// =========================================================================
// GET /cliente/:id
// =========================================================================

/// Get cliente by ID
async fn get_cliente(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Cliente>, AppError> {
    let Path(id) = id.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let cliente = state.projection().get_cliente(id).await?;

    Ok(Json(cliente))
}

// =========================================================================
// GET /clientes/buscar
// =========================================================================

/// Search clientes by nombre and/or apellido
async fn search_clientes(
    State(state): State<AppState>,
    Query(query): Query<BuscarQuery>,
) -> Result<Json<Vec<Cliente>>, AppError> {
    let filter = ClienteFilter::from(query);
    let clientes = state.projection().search(&filter).await?;

    Ok(Json(clientes))
}
