#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use materials_service::{
    config::AppConfig,
    db,
    dto::FieldNaming,
    entities::{material, material_type},
    AppState,
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use serde_json::Value;
use tower::ServiceExt;

/// Helper harness for spinning up the full router backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        Self::with_naming(FieldNaming::SnakeCase).await
    }

    pub async fn with_naming(naming: FieldNaming) -> Self {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_082,
            "test".to_string(),
        );
        // A single pooled connection keeps the in-memory database alive and shared.
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;
        cfg.json_naming = naming;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);
        let router = materials_service::build_router(state.clone());

        Self { router, state }
    }

    /// Send a request against the router with an optional JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let body = body.map(|json| {
            serde_json::to_string(&json).expect("failed to serialize json request body")
        });
        self.request_raw(method, uri, body.as_deref()).await
    }

    /// Send a request whose body is passed through verbatim as JSON.
    pub async fn request_raw(&self, method: Method, uri: &str, body: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(raw) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(raw.to_string())
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Inserts a material type directly through the store.
    pub async fn seed_type(&self, name: &str) -> material_type::Model {
        material_type::ActiveModel {
            material_type_id: NotSet,
            material_type_name: Set(name.to_string()),
        }
        .insert(self.state.db.as_ref())
        .await
        .expect("seed material type")
    }

    /// Inserts a material directly through the store.
    pub async fn seed_material(&self, name: &str, type_id: i64, status: i16) -> material::Model {
        material::ActiveModel {
            material_id: NotSet,
            material_name: Set(name.to_string()),
            material_type_id: Set(type_id),
            material_desc: Set(None),
            material_status: Set(status),
            material_purchased_at: Set(None),
            material_location: Set(None),
        }
        .insert(self.state.db.as_ref())
        .await
        .expect("seed material")
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}
