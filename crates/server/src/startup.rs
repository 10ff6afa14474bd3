use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use service::customer::repo::build_repository;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address: {e}")))
}

/// Connect and migrate when the configured backend is relational.
async fn connect_storage(cfg: &AppConfig) -> Result<Option<DatabaseConnection>, StartupError> {
    if !cfg.storage.backend.needs_database() {
        return Ok(None);
    }
    let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
    let db = models::db::connect_with_config(&db_cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    info!("database schema up to date");
    Ok(Some(db))
}

/// Wire storage, service and router for `cfg`.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = connect_storage(cfg).await?;
    let repo = build_repository(cfg.storage.backend, db, cfg.storage.seed)
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(routes::build_router(ServerState::new(repo), build_cors()))
}

/// Public entry: build the app from `config.toml`/env and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_or_default().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, backend = cfg.storage.backend.as_str(), "starting customer server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
