use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::naming::{nullable, prefer_legacy, FieldNaming, Nullable};
use crate::entities::material;
use crate::errors::ServiceError;

/// Inbound material body.
///
/// Accepts the canonical `snake_case` keys and the legacy `camelCase` keys in
/// the same document. When both spellings of a field are present the legacy
/// one wins. Nullable fields keep absent and `null` apart so an update can
/// tell "leave as is" from "clear".
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "RawMaterialPayload")]
pub struct MaterialPayload {
    pub material_id: Option<i64>,
    pub material_name: Option<String>,
    pub material_type_id: Option<i64>,
    pub material_desc: Nullable<String>,
    pub material_status: Option<i16>,
    pub material_purchased_at: Nullable<DateTime<Utc>>,
    pub material_location: Nullable<String>,
}

#[derive(Deserialize)]
struct RawMaterialPayload {
    material_id: Option<i64>,
    #[serde(rename = "materialId")]
    legacy_material_id: Option<i64>,

    material_name: Option<String>,
    #[serde(rename = "materialName")]
    legacy_material_name: Option<String>,

    material_type_id: Option<i64>,
    #[serde(rename = "materialTypeId")]
    legacy_material_type_id: Option<i64>,

    #[serde(default, deserialize_with = "nullable")]
    material_desc: Nullable<String>,
    #[serde(rename = "materialDesc", default, deserialize_with = "nullable")]
    legacy_material_desc: Nullable<String>,

    material_status: Option<i16>,
    #[serde(rename = "materialStatus")]
    legacy_material_status: Option<i16>,

    #[serde(default, deserialize_with = "nullable")]
    material_purchased_at: Nullable<DateTime<Utc>>,
    #[serde(rename = "materialPurchasedAt", default, deserialize_with = "nullable")]
    legacy_material_purchased_at: Nullable<DateTime<Utc>>,

    #[serde(default, deserialize_with = "nullable")]
    material_location: Nullable<String>,
    #[serde(rename = "materialLocation", default, deserialize_with = "nullable")]
    legacy_material_location: Nullable<String>,
}

impl From<RawMaterialPayload> for MaterialPayload {
    fn from(raw: RawMaterialPayload) -> Self {
        Self {
            material_id: prefer_legacy(raw.legacy_material_id, raw.material_id),
            material_name: prefer_legacy(raw.legacy_material_name, raw.material_name),
            material_type_id: prefer_legacy(raw.legacy_material_type_id, raw.material_type_id),
            material_desc: prefer_legacy(raw.legacy_material_desc, raw.material_desc),
            material_status: prefer_legacy(raw.legacy_material_status, raw.material_status),
            material_purchased_at: prefer_legacy(
                raw.legacy_material_purchased_at,
                raw.material_purchased_at,
            ),
            material_location: prefer_legacy(
                raw.legacy_material_location,
                raw.material_location,
            ),
        }
    }
}

impl MaterialPayload {
    /// Checks the fields a brand-new material cannot do without.
    pub fn ensure_creatable(&self) -> Result<(), ServiceError> {
        match self.material_name.as_deref() {
            Some(name) if !name.trim().is_empty() => {}
            _ => {
                return Err(ServiceError::ValidationError(
                    "material_name is required".to_string(),
                ))
            }
        }
        if self.material_type_id.is_none() {
            return Err(ServiceError::ValidationError(
                "material_type_id is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Overlays every supplied field onto `base`; absent fields keep the base value.
    pub fn merge_onto(self, base: material::Model) -> material::Model {
        material::Model {
            material_id: self.material_id.unwrap_or(base.material_id),
            material_name: self.material_name.unwrap_or(base.material_name),
            material_type_id: self.material_type_id.unwrap_or(base.material_type_id),
            material_desc: self.material_desc.unwrap_or(base.material_desc),
            material_status: self.material_status.unwrap_or(base.material_status),
            material_purchased_at: self
                .material_purchased_at
                .unwrap_or(base.material_purchased_at),
            material_location: self.material_location.unwrap_or(base.material_location),
        }
    }
}

/// Outbound material body in the configured naming convention.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MaterialJson<'a> {
    Canonical(&'a material::Model),
    Legacy(LegacyMaterial<'a>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMaterial<'a> {
    material_id: i64,
    material_name: &'a str,
    material_type_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    material_desc: Option<&'a str>,
    material_status: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    material_purchased_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    material_location: Option<&'a str>,
}

impl<'a> MaterialJson<'a> {
    pub fn new(model: &'a material::Model, naming: FieldNaming) -> Self {
        match naming {
            FieldNaming::SnakeCase => MaterialJson::Canonical(model),
            FieldNaming::CamelCase => MaterialJson::Legacy(LegacyMaterial {
                material_id: model.material_id,
                material_name: &model.material_name,
                material_type_id: model.material_type_id,
                material_desc: model.material_desc.as_deref(),
                material_status: model.material_status,
                material_purchased_at: model.material_purchased_at,
                material_location: model.material_location.as_deref(),
            }),
        }
    }

    pub fn many(models: &'a [material::Model], naming: FieldNaming) -> Vec<Self> {
        models.iter().map(|m| Self::new(m, naming)).collect()
    }
}
