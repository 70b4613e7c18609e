use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Material entity: one physical inventory item.
///
/// Serializes with the canonical `snake_case` field names. The legacy
/// `camelCase` rendering lives in [`crate::dto::material::MaterialJson`].
#[derive(
    Clone, Debug, Default, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate, ToSchema,
)]
#[sea_orm(table_name = "materials_info")]
#[schema(as = Material)]
pub struct Model {
    /// Primary key, assigned by the store on insert
    #[sea_orm(primary_key)]
    pub material_id: i64,

    #[validate(
        length(max = 255, message = "material_name cannot exceed 255 characters"),
        custom = "validate_not_blank"
    )]
    pub material_name: String,

    /// Soft reference to `material_type.material_type_id`
    pub material_type_id: i64,

    #[validate(length(max = 255, message = "material_desc cannot exceed 255 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_desc: Option<String>,

    /// 0 means available
    pub material_status: i16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_purchased_at: Option<DateTime<Utc>>,

    #[validate(length(max = 100, message = "material_location cannot exceed 100 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_location: Option<String>,
}

/// Status code for a material that is available.
pub const STATUS_AVAILABLE: i16 = 0;

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("material_name");
        err.message = Some("material_name is required".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::material_type::Entity",
        from = "Column::MaterialTypeId",
        to = "super::material_type::Column::MaterialTypeId"
    )]
    MaterialType,
}

impl Related<super::material_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaterialType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
