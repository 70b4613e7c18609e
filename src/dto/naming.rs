use serde::{Deserialize, Deserializer, Serialize};

/// Field-naming convention used when rendering response bodies.
///
/// Input always accepts both conventions; this only selects the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldNaming {
    /// `material_id`, `material_name`, ...
    #[default]
    #[serde(rename = "snake_case", alias = "snake")]
    SnakeCase,
    /// `materialId`, `materialName`, ...
    #[serde(rename = "camelCase", alias = "camel")]
    CamelCase,
}

/// Tri-state value for nullable columns:
/// `None` = key absent, `Some(None)` = explicit `null`, `Some(Some(v))` = value.
pub type Nullable<T> = Option<Option<T>>;

/// Keeps an explicit `null` distinct from an absent key.
/// Pair with `#[serde(default)]` so absence yields `None`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Nullable<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Legacy key wins whenever it was supplied.
pub(crate) fn prefer_legacy<T>(legacy: Option<T>, canonical: Option<T>) -> Option<T> {
    legacy.or(canonical)
}
