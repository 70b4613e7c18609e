//! Materials Service Library
//!
//! Material and material-type CRUD, paginated listing and per-type
//! availability statistics behind an axum HTTP API.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod migrator;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod tracing;

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer};

use handlers::{material_types, materials};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let services = handlers::AppServices::new(db.clone());
        Self {
            db,
            config,
            services,
        }
    }
}

/// Material and material-type routes, relative to the mount point
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/materials",
            get(materials::list_materials).post(materials::create_material),
        )
        .route(
            "/materials/",
            get(materials::list_materials).post(materials::create_material),
        )
        .route("/materials/stats", get(materials::material_stats))
        .route(
            "/materials/types",
            get(material_types::list_material_types).post(material_types::create_material_type),
        )
        .route(
            "/materials/types/",
            get(material_types::list_material_types).post(material_types::create_material_type),
        )
        .route(
            "/materials/types/:id",
            get(material_types::get_material_type)
                .put(material_types::update_material_type)
                .delete(material_types::delete_material_type),
        )
        .route(
            "/materials/:id",
            get(materials::get_material)
                .put(materials::update_material)
                .delete(materials::delete_material),
        )
}

/// Full application router: API under `/api/v1` and at the root, health,
/// Swagger UI, and the request-id, tracing, CORS and timeout layers.
pub fn build_router(state: AppState) -> Router {
    let cors_layer = if state.config.should_allow_permissive_cors() {
        ::tracing::info!(
            "Using permissive CORS ({})",
            if state.config.is_development() {
                "development environment"
            } else {
                "explicit override enabled"
            }
        );
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };
    let request_timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::<AppState>::new()
        .route("/", get(|| async { "materials-service up" }))
        .nest("/health", health::health_routes())
        .nest("/api/v1", api_routes())
        .merge(api_routes())
        .merge(openapi::swagger_ui())
        // HTTP tracing layer for consistent request/response telemetry
        .layer(tracing::configure_http_tracing())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors_layer)
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}
