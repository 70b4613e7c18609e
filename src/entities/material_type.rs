use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Material type entity: a named category of materials.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate, ToSchema,
)]
#[sea_orm(table_name = "material_type")]
#[schema(as = MaterialType)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub material_type_id: i64,

    #[validate(
        length(max = 100, message = "material_type_name cannot exceed 100 characters"),
        custom = "validate_not_blank"
    )]
    pub material_type_name: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("material_type_name");
        err.message = Some("material_type_name is required".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::material::Entity")]
    Materials,
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Materials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
