/*!
 * # Health Check Module
 *
 * - Basic health check (`/health`) - process is up
 * - Readiness check (`/health/ready`) - the store answers a ping
 * - Version (`/health/version`) - build information
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error};

use crate::AppState;

/// Basic health status
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Up,
    Down,
}

/// Returns build and version information
pub async fn version_info() -> impl IntoResponse {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Simple health check response that doesn't touch the store
pub async fn simple_health_check() -> impl IntoResponse {
    debug!("Health check endpoint called");

    (
        StatusCode::OK,
        Json(json!({
            "status": HealthStatus::Up,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// Readiness check endpoint; 503 while the store is unreachable
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    debug!("Readiness check endpoint called");

    let database = match crate::db::check_connection(&state.db).await {
        Ok(()) => HealthStatus::Up,
        Err(e) => {
            error!("Database health check failed: {}", e);
            HealthStatus::Down
        }
    };

    let status_code = match database {
        HealthStatus::Up => StatusCode::OK,
        HealthStatus::Down => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status_code,
        Json(json!({
            "ready": database == HealthStatus::Up,
            "database": database,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// Creates router with health check endpoints
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(simple_health_check))
        .route("/ready", get(readiness_check))
        .route("/version", get(version_info))
}
