use serde::{Deserialize, Serialize};

use super::naming::{prefer_legacy, FieldNaming};
use crate::entities::material_type;
use crate::errors::ServiceError;

/// Inbound material type body, same dual-convention rule as materials.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "RawMaterialTypePayload")]
pub struct MaterialTypePayload {
    pub material_type_id: Option<i64>,
    pub material_type_name: Option<String>,
}

#[derive(Deserialize)]
struct RawMaterialTypePayload {
    material_type_id: Option<i64>,
    #[serde(rename = "materialTypeId")]
    legacy_material_type_id: Option<i64>,
    material_type_name: Option<String>,
    #[serde(rename = "materialTypeName")]
    legacy_material_type_name: Option<String>,
}

impl From<RawMaterialTypePayload> for MaterialTypePayload {
    fn from(raw: RawMaterialTypePayload) -> Self {
        Self {
            material_type_id: prefer_legacy(raw.legacy_material_type_id, raw.material_type_id),
            material_type_name: prefer_legacy(
                raw.legacy_material_type_name,
                raw.material_type_name,
            ),
        }
    }
}

impl MaterialTypePayload {
    /// Material types are overwritten whole, so the name is always required.
    pub fn into_model(self, material_type_id: i64) -> Result<material_type::Model, ServiceError> {
        let name = self
            .material_type_name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| {
                ServiceError::ValidationError("material_type_name is required".to_string())
            })?;
        Ok(material_type::Model {
            material_type_id,
            material_type_name: name,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MaterialTypeJson<'a> {
    Canonical(&'a material_type::Model),
    Legacy(LegacyMaterialType<'a>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMaterialType<'a> {
    material_type_id: i64,
    material_type_name: &'a str,
}

impl<'a> MaterialTypeJson<'a> {
    pub fn new(model: &'a material_type::Model, naming: FieldNaming) -> Self {
        match naming {
            FieldNaming::SnakeCase => MaterialTypeJson::Canonical(model),
            FieldNaming::CamelCase => MaterialTypeJson::Legacy(LegacyMaterialType {
                material_type_id: model.material_type_id,
                material_type_name: &model.material_type_name,
            }),
        }
    }

    pub fn many(models: &'a [material_type::Model], naming: FieldNaming) -> Vec<Self> {
        models.iter().map(|m| Self::new(m, naming)).collect()
    }
}
