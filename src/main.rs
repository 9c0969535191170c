//! cliente_service - Cliente Management Backend API
//!
//! Stores clientes and serves age KPIs and list views with a derived
//! probable death date.

use std::net::SocketAddr;
use std::sync::Arc;

use cliente_service::projection::ProjectionService;
use cliente_service::{
    api, db, AppState, ClienteStore, Config, InMemoryClienteRepository, PgClienteRepository,
    StoreBackend,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
///
/// `LOG_FORMAT=json` switches to structured JSON output.
fn init_tracing() {
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cliente_service=debug,tower_http=debug".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

/// Connect to Postgres and make sure the schema is in place
async fn connect_postgres(config: &Config) -> anyhow::Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for the postgres backend"))?;

    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(database_url)
        .await?;

    db::verify_connection(&pool).await?;
    db::ensure_schema(&pool).await?;

    if !db::check_schema(&pool).await? {
        tracing::error!("Database schema is not complete.");
        return Err(anyhow::anyhow!("Database schema incomplete"));
    }

    tracing::info!("Database connected successfully");
    Ok(pool)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!(
        environment = %config.environment,
        backend = ?config.store_backend,
        "Starting cliente_service"
    );

    let (store, pool): (Arc<dyn ClienteStore>, Option<PgPool>) = match config.store_backend {
        StoreBackend::Postgres => {
            let pool = connect_postgres(&config).await?;
            let store: Arc<dyn ClienteStore> = Arc::new(PgClienteRepository::new(pool.clone()));
            (store, Some(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; clientes are lost on shutdown");
            let store: Arc<dyn ClienteStore> = Arc::new(InMemoryClienteRepository::new());
            (store, None)
        }
    };

    let state = AppState::new(store.clone());
    log_store_summary(&store, &state.projection()).await;

    let app = api::build_router(state, &config.cors_allowed_origins);

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutting down...");
    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database connections closed. Goodbye!");
    }

    Ok(())
}

/// Log how many clientes are stored and their mean age
async fn log_store_summary(store: &Arc<dyn ClienteStore>, projection: &ProjectionService) {
    match (store.count().await, projection.average_edad().await) {
        (Ok(count), Ok(average)) => {
            tracing::info!(clientes = count, promedio_edad = ?average, "Store ready");
        }
        (Err(e), _) => tracing::warn!("Could not count clientes: {}", e),
        (_, Err(e)) => tracing::warn!("Could not compute average age: {}", e),
    }
}

/// Shutdown signal handler for graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}
