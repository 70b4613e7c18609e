use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-type counts produced by the stats aggregation query.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize, ToSchema)]
pub struct MaterialStatsByType {
    pub material_type_id: i64,
    pub material_type_name: String,
    /// All materials of this type
    pub total_count: i64,
    /// Materials of this type with status 0
    pub available_count: i64,
}

/// Availability summary across all material types.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MaterialStats {
    pub by_type: Vec<MaterialStatsByType>,
    pub available_total: i64,
}
