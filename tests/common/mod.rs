//! Common test utilities

#![allow(dead_code)]

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use cliente_service::domain::{FixedClock, FixedRandom, RandomSource};
use cliente_service::repository::ClienteFilter;
use cliente_service::{api, AppState, Cliente, ClienteStore, InMemoryClienteRepository, NewCliente, StoreError};
use serde_json::Value;
use tower::util::ServiceExt;

/// Date every test app treats as today
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 24).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Router over `store` with a pinned clock and a fixed random variation
pub fn build_app(store: Arc<dyn ClienteStore>, variation: i32) -> Router {
    build_app_with_random(store, Arc::new(FixedRandom(variation)))
}

/// Router over `store` with a pinned clock and the given random source
pub fn build_app_with_random(store: Arc<dyn ClienteStore>, random: Arc<dyn RandomSource>) -> Router {
    let state = AppState::new(store)
        .with_clock(Arc::new(FixedClock(today())))
        .with_random(random);

    api::build_router(state, &["http://localhost:4200".to_string()])
}

/// Fresh in-memory store plus an app using it
pub fn setup_app() -> (Router, Arc<InMemoryClienteRepository>) {
    let store = Arc::new(InMemoryClienteRepository::new());
    (build_app(store.clone(), 0), store)
}

/// Send a request and decode the JSON body (`Value::Null` when not JSON)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Returns `start`, `start + 1`, ... clamped into the requested range
pub struct SteppingRandom(AtomicI32);

impl SteppingRandom {
    pub fn starting_at(start: i32) -> Self {
        Self(AtomicI32::new(start))
    }
}

impl RandomSource for SteppingRandom {
    fn next_in_range(&self, low: i32, high: i32) -> i32 {
        self.0.fetch_add(1, Ordering::SeqCst).clamp(low, high)
    }
}

/// Store whose every call fails, to exercise the 500 path
pub struct UnavailableStore;

impl UnavailableStore {
    fn error() -> StoreError {
        StoreError::Unavailable("connection refused".to_string())
    }
}

#[async_trait]
impl ClienteStore for UnavailableStore {
    async fn insert(&self, _cliente: NewCliente) -> Result<Cliente, StoreError> {
        Err(Self::error())
    }

    async fn find_all(&self) -> Result<Vec<Cliente>, StoreError> {
        Err(Self::error())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Cliente>, StoreError> {
        Err(Self::error())
    }

    async fn find_all_edades(&self) -> Result<Vec<i32>, StoreError> {
        Err(Self::error())
    }

    async fn average_edad(&self) -> Result<Option<f64>, StoreError> {
        Err(Self::error())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Err(Self::error())
    }

    async fn search(&self, _filter: &ClienteFilter) -> Result<Vec<Cliente>, StoreError> {
        Err(Self::error())
    }
}
