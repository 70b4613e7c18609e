use super::common::{created_response, lenient_i64, no_content_response, success_response};
use crate::{
    dto::{MaterialJson, MaterialPayload, MaterialStats},
    entities::material,
    errors::ApiError,
    handlers::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Json, Path, Query, State,
    },
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Paging query; unparsable or non-positive values fall back to defaults.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMaterialsParams {
    /// 1-based page number, default 1
    pub page: Option<String>,
    /// Items per page, default 20
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// Envelope returned by the material list endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct MaterialListResponse<'a> {
    #[schema(value_type = Vec<material::Model>)]
    pub items: Vec<MaterialJson<'a>>,
    pub total: u64,
    pub page: i64,
    #[serde(rename = "pageSize")]
    pub page_size: i64,
    pub ts: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/api/v1/materials",
    params(ListMaterialsParams),
    responses(
        (status = 200, description = "Page of materials ordered by id", body = MaterialListResponse,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "materials"
)]
pub async fn list_materials(
    State(state): State<AppState>,
    params: Result<Query<ListMaterialsParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let page = lenient_i64(params.page.as_deref());
    let page_size = lenient_i64(params.page_size.as_deref());

    let result = state.services.materials.list(page, page_size).await?;

    Ok(success_response(MaterialListResponse {
        items: MaterialJson::many(&result.items, state.config.json_naming),
        total: result.total,
        page: result.page,
        page_size: result.page_size,
        ts: Utc::now(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/materials/{id}",
    params(("id" = i64, Path, description = "Material id")),
    responses(
        (status = 200, description = "Material returned", body = material::Model),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "materials"
)]
pub async fn get_material(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    let found = state.services.materials.get(id).await?;
    Ok(success_response(MaterialJson::new(
        &found,
        state.config.json_naming,
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/materials",
    request_body = material::Model,
    responses(
        (status = 201, description = "Material created", body = material::Model),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "materials"
)]
pub async fn create_material(
    State(state): State<AppState>,
    payload: Result<Json<Option<MaterialPayload>>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload?;
    let created = state.services.materials.create(payload).await?;
    Ok(created_response(MaterialJson::new(
        &created,
        state.config.json_naming,
    )))
}

#[utoipa::path(
    put,
    path = "/api/v1/materials/{id}",
    params(("id" = i64, Path, description = "Material id")),
    request_body = material::Model,
    responses(
        (status = 200, description = "Material updated", body = material::Model),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "materials"
)]
pub async fn update_material(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Option<MaterialPayload>>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let updated = state.services.materials.update(id, payload).await?;
    Ok(success_response(MaterialJson::new(
        &updated,
        state.config.json_naming,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/materials/{id}",
    params(("id" = i64, Path, description = "Material id")),
    responses(
        (status = 204, description = "Material deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "materials"
)]
pub async fn delete_material(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    state.services.materials.delete(id).await?;
    Ok(no_content_response())
}

#[utoipa::path(
    get,
    path = "/api/v1/materials/stats",
    responses(
        (status = 200, description = "Per-type counts and overall availability", body = MaterialStats),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "materials"
)]
pub async fn material_stats(State(state): State<AppState>) -> Result<Response, ApiError> {
    let stats = state.services.materials.stats().await?;
    Ok(success_response(stats))
}
