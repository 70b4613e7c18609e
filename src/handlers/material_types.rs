use super::common::{created_response, no_content_response, success_response};
use crate::{
    dto::{MaterialTypeJson, MaterialTypePayload},
    entities::material_type,
    errors::ApiError,
    handlers::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Json, Path, State,
    },
    response::Response,
};

#[utoipa::path(
    get,
    path = "/api/v1/materials/types",
    responses(
        (status = 200, description = "All material types ordered by id", body = [material_type::Model]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "material-types"
)]
pub async fn list_material_types(State(state): State<AppState>) -> Result<Response, ApiError> {
    let types = state.services.material_types.list().await?;
    Ok(success_response(MaterialTypeJson::many(
        &types,
        state.config.json_naming,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/materials/types/{id}",
    params(("id" = i64, Path, description = "Material type id")),
    responses(
        (status = 200, description = "Material type returned", body = material_type::Model),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "material-types"
)]
pub async fn get_material_type(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    let found = state.services.material_types.get(id).await?;
    Ok(success_response(MaterialTypeJson::new(
        &found,
        state.config.json_naming,
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/materials/types",
    request_body = material_type::Model,
    responses(
        (status = 201, description = "Material type created", body = material_type::Model),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "material-types"
)]
pub async fn create_material_type(
    State(state): State<AppState>,
    payload: Result<Json<Option<MaterialTypePayload>>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload?;
    let created = state.services.material_types.create(payload).await?;
    Ok(created_response(MaterialTypeJson::new(
        &created,
        state.config.json_naming,
    )))
}

#[utoipa::path(
    put,
    path = "/api/v1/materials/types/{id}",
    params(("id" = i64, Path, description = "Material type id")),
    request_body = material_type::Model,
    responses(
        (status = 200, description = "Material type updated", body = material_type::Model),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "material-types"
)]
pub async fn update_material_type(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Option<MaterialTypePayload>>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let updated = state.services.material_types.update(id, payload).await?;
    Ok(success_response(MaterialTypeJson::new(
        &updated,
        state.config.json_naming,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/materials/types/{id}",
    params(("id" = i64, Path, description = "Material type id")),
    responses(
        (status = 204, description = "Material type deleted; its materials are kept"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "material-types"
)]
pub async fn delete_material_type(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    state.services.material_types.delete(id).await?;
    Ok(no_content_response())
}
