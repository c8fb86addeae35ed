//! HTTP surface of the fleet backend, built on axum.

pub mod error;
pub mod handlers;
pub mod middleware;

use crate::config::ServerConfig;
use crate::core::fleet::Fleet;
use crate::utils::error::{FleetError, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Shared state: the fleet behind one lock, so every command sees and leaves a consistent fleet.
#[derive(Clone)]
pub struct AppState {
    pub fleet: Arc<RwLock<Fleet>>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet: Arc::new(RwLock::new(fleet)),
            started_at: Utc::now(),
        }
    }
}

pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| FleetError::InvalidConfigValueError {
                field: "server.cors_origins".to_string(),
                value: origin.clone(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

pub fn build_router(state: AppState, server: &ServerConfig) -> Result<Router> {
    let cors = cors_layer(&server.cors_origins)?;

    Ok(Router::new()
        .route(
            "/api/vehicles",
            get(handlers::list_vehicles).post(handlers::add_vehicle),
        )
        .route("/api/command", post(handlers::run_command))
        .route("/api/drivers", get(handlers::list_drivers))
        .route("/api/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(cors)
        .with_state(state))
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(state: AppState, server: &ServerConfig) -> Result<()> {
    let app = build_router(state, server)?;
    let addr = format!("{}:{}", server.host, server.port);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| FleetError::ServerError {
            message: format!("bind {} failed: {}", addr, e),
        })?;
    tracing::info!("✅ Backend running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FleetError::ServerError {
            message: e.to_string(),
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("🛑 Shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_shares_one_fleet() {
        let state = AppState::new(Fleet::demo());
        let clone = state.clone();

        tokio_test::block_on(async {
            clone
                .fleet
                .write()
                .await
                .assign("sam", "vehicle a");
            let fleet = state.fleet.read().await;
            assert_eq!(fleet.vehicle_of("sam").map(|(n, _)| n), Some("vehicle a"));
        });
    }

    #[test]
    fn test_cors_layer_rejects_invalid_header_values() {
        assert!(cors_layer(&["http://localhost:5173".to_string()]).is_ok());
        assert!(cors_layer(&["http://bad\norigin".to_string()]).is_err());
    }
}
