use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Materials Service API",
        version = "1.0.0",
        description = r#"
# Materials Service API

CRUD over inventory materials and material types, paginated listing and
per-type availability statistics.

## Field naming

Request bodies accept both `snake_case` (`material_name`) and the legacy
`camelCase` (`materialName`) keys. When a field is sent under both names the
`camelCase` value is used. Responses use the convention configured with
`json_naming` (default `snake_case`).

## Pagination

`GET /materials` takes `page` (default 1) and `pageSize` (default 20).
Missing, non-numeric or non-positive values fall back to the defaults.

## Errors

Failures return `{"error": "..."}` plus `request_id` when one is known.
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8082", description = "Local development")
    ),
    tags(
        (name = "materials", description = "Material management and statistics"),
        (name = "material-types", description = "Material type management")
    ),
    paths(
        crate::handlers::materials::list_materials,
        crate::handlers::materials::get_material,
        crate::handlers::materials::create_material,
        crate::handlers::materials::update_material,
        crate::handlers::materials::delete_material,
        crate::handlers::materials::material_stats,

        crate::handlers::material_types::list_material_types,
        crate::handlers::material_types::get_material_type,
        crate::handlers::material_types::create_material_type,
        crate::handlers::material_types::update_material_type,
        crate::handlers::material_types::delete_material_type,
    ),
    components(
        schemas(
            crate::entities::material::Model,
            crate::entities::material_type::Model,
            crate::dto::MaterialStats,
            crate::dto::MaterialStatsByType,
            crate::handlers::materials::MaterialListResponse,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
