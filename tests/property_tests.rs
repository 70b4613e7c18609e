//! Property-based tests for the materials domain.
//!
//! Pagination coercion and the dual field-naming contract are checked across
//! a wide range of generated inputs.

use materials_service::dto::{FieldNaming, MaterialJson, MaterialPayload};
use materials_service::entities::material;
use materials_service::services::materials::page_window;
use proptest::prelude::*;
use serde_json::json;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,40}"
}

fn material_strategy() -> impl Strategy<Value = material::Model> {
    (
        1i64..1_000_000,
        name_strategy(),
        1i64..10_000,
        proptest::option::of("[a-z ]{1,30}"),
        0i16..5,
        proptest::option::of("[A-Z][0-9]{1,3}"),
    )
        .prop_map(|(id, name, type_id, desc, status, location)| material::Model {
            material_id: id,
            material_name: name,
            material_type_id: type_id,
            material_desc: desc,
            material_status: status,
            material_purchased_at: None,
            material_location: location,
        })
}

// Property: paging input is always coerced into a valid window
proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn page_window_is_always_positive(page in any::<i64>(), size in any::<i64>()) {
        let (page, size, offset) = page_window(page, size);
        prop_assert!(page >= 1);
        prop_assert!(size >= 1);
        prop_assert!(offset >= 0);
    }

    #[test]
    fn non_positive_inputs_use_defaults(page in i64::MIN..=0, size in i64::MIN..=0) {
        prop_assert_eq!(page_window(page, size), (1, 20, 0));
    }

    #[test]
    fn offset_matches_previous_pages(page in 1i64..10_000, size in 1i64..1_000) {
        let (_, _, offset) = page_window(page, size);
        prop_assert_eq!(offset, (page - 1) * size);
    }
}

// Property: legacy keys win whenever both conventions are present
proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn legacy_id_and_name_always_win(
        legacy_id in any::<i64>(),
        canonical_id in any::<i64>(),
        legacy_name in name_strategy(),
        canonical_name in name_strategy(),
    ) {
        let payload: MaterialPayload = serde_json::from_value(json!({
            "material_id": canonical_id,
            "materialId": legacy_id,
            "material_name": canonical_name,
            "materialName": legacy_name.clone(),
        }))
        .unwrap();
        prop_assert_eq!(payload.material_id, Some(legacy_id));
        prop_assert_eq!(payload.material_name, Some(legacy_name));
    }

    #[test]
    fn either_convention_round_trips(model in material_strategy(), camel in any::<bool>()) {
        let naming = if camel { FieldNaming::CamelCase } else { FieldNaming::SnakeCase };
        let value = serde_json::to_value(MaterialJson::new(&model, naming)).unwrap();
        let parsed: MaterialPayload = serde_json::from_value(value).unwrap();
        prop_assert_eq!(parsed.merge_onto(material::Model::default()), model);
    }
}
