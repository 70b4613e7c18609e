mod common;

use axum::http::{Method, StatusCode};
use materials_service::dto::FieldNaming;
use serde_json::json;

use common::{response_json, TestApp};

#[tokio::test]
async fn material_lifecycle() {
    let app = TestApp::new().await;
    let optics = app.seed_type("Optics").await;

    // Create
    let response = app
        .request(
            Method::POST,
            "/api/v1/materials",
            Some(json!({
                "material_name": "Microscope",
                "material_type_id": optics.material_type_id,
                "material_desc": "optical",
                "material_location": "Lab 2",
                "material_purchased_at": "2024-05-01T08:30:00Z"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await;
    let id = created["material_id"].as_i64().expect("material id");
    assert!(id > 0);
    assert_eq!(created["material_status"], 0);
    assert_eq!(created["material_purchased_at"], "2024-05-01T08:30:00Z");

    // Read
    let response = app
        .request(Method::GET, &format!("/api/v1/materials/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = response_json(response).await;
    assert_eq!(fetched, created);

    // Update one field, clear another, leave the rest
    let response = app
        .request(
            Method::PUT,
            &format!("/api/v1/materials/{id}"),
            Some(json!({ "material_status": 1, "material_location": null })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["material_status"], 1);
    assert!(updated.get("material_location").is_none());
    assert_eq!(updated["material_name"], "Microscope");
    assert_eq!(updated["material_desc"], "optical");

    // Delete
    let response = app
        .request(Method::DELETE, &format!("/api/v1/materials/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .request(Method::GET, &format!("/api/v1/materials/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], format!("Not found: material {id}"));
}

#[tokio::test]
async fn client_supplied_id_is_ignored_on_create() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/materials",
            Some(json!({ "material_id": 999, "material_name": "Drill", "material_type_id": 1 })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await;
    assert_ne!(created["material_id"], 999);

    let response = app.request(Method::GET, "/api/v1/materials/999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn legacy_keys_win_over_canonical_keys() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/materials",
            Some(json!({
                "materialName": "Legacy Name",
                "material_name": "Canonical Name",
                "materialTypeId": 7,
                "material_type_id": 8
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await;
    assert_eq!(created["material_name"], "Legacy Name");
    assert_eq!(created["material_type_id"], 7);
}

#[tokio::test]
async fn put_uses_path_id_not_body_id() {
    let app = TestApp::new().await;
    let first = app.seed_material("First", 1, 0).await;
    let second = app.seed_material("Second", 1, 0).await;

    let response = app
        .request(
            Method::PUT,
            &format!("/api/v1/materials/{}", first.material_id),
            Some(json!({ "material_id": second.material_id, "material_name": "Renamed" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["material_id"], first.material_id);
    assert_eq!(updated["material_name"], "Renamed");

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/materials/{}", second.material_id),
            None,
        )
        .await;
    let untouched = response_json(response).await;
    assert_eq!(untouched["material_name"], "Second");
}

#[tokio::test]
async fn missing_rows_give_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::PUT,
            "/api/v1/materials/4242",
            Some(json!({ "material_name": "Ghost" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.request(Method::DELETE, "/api/v1/materials/4242", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn invalid_requests_give_bad_request() {
    let app = TestApp::new().await;

    // Non-numeric id
    let response = app.request(Method::GET, "/api/v1/materials/abc", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "invalid id");

    // Malformed JSON
    let response = app
        .request_raw(Method::POST, "/api/v1/materials", Some("{not json"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Literal null body
    let response = app
        .request_raw(Method::POST, "/api/v1/materials", Some("null"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing required fields
    let response = app
        .request(
            Method::POST,
            "/api/v1/materials",
            Some(json!({ "material_type_id": 1 })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let response = app
        .request(
            Method::POST,
            "/api/v1/materials",
            Some(json!({ "material_name": "No type" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Null update body
    let seeded = app.seed_material("Target", 1, 0).await;
    let response = app
        .request_raw(
            Method::PUT,
            &format!("/api/v1/materials/{}", seeded.material_id),
            Some("null"),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_paginates_in_id_order() {
    let app = TestApp::new().await;
    let mut ids = Vec::new();
    for i in 0..25 {
        ids.push(app.seed_material(&format!("Item {i}"), 1, 0).await.material_id);
    }

    let response = app
        .request(Method::GET, "/api/v1/materials?page=2&pageSize=10", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["total"], 25);
    assert_eq!(body["page"], 2);
    assert_eq!(body["pageSize"], 10);
    assert!(body["ts"].is_string());
    let page_ids: Vec<i64> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["material_id"].as_i64().unwrap())
        .collect();
    assert_eq!(page_ids, ids[10..20].to_vec());

    // Past the end
    let response = app
        .request(Method::GET, "/api/v1/materials?page=4&pageSize=10", None)
        .await;
    let body = response_json(response).await;
    assert_eq!(body["total"], 25);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_coerces_bad_paging_input() {
    let app = TestApp::new().await;
    for i in 0..3 {
        app.seed_material(&format!("Item {i}"), 1, 0).await;
    }

    for uri in [
        "/api/v1/materials",
        "/api/v1/materials?page=0&pageSize=0",
        "/api/v1/materials?page=-3&pageSize=-1",
        "/api/v1/materials?page=abc&pageSize=xyz",
        "/materials/",
    ] {
        let response = app.request(Method::GET, uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let body = response_json(response).await;
        assert_eq!(body["page"], 1, "{uri}");
        assert_eq!(body["pageSize"], 20, "{uri}");
        assert_eq!(body["total"], 3, "{uri}");
        assert_eq!(body["items"].as_array().unwrap().len(), 3, "{uri}");
    }
}

#[tokio::test]
async fn list_is_stable_without_writes() {
    let app = TestApp::new().await;
    for i in 0..5 {
        app.seed_material(&format!("Item {i}"), 1, 0).await;
    }

    let first = response_json(
        app.request(Method::GET, "/api/v1/materials?page=1&pageSize=3", None)
            .await,
    )
    .await;
    let second = response_json(
        app.request(Method::GET, "/api/v1/materials?page=1&pageSize=3", None)
            .await,
    )
    .await;
    assert_eq!(first["items"], second["items"]);
    assert_eq!(first["total"], second["total"]);
}

#[tokio::test]
async fn camel_case_output_when_configured() {
    let app = TestApp::with_naming(FieldNaming::CamelCase).await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/materials",
            Some(json!({ "material_name": "Lens", "material_type_id": 2 })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await;
    assert_eq!(created["materialName"], "Lens");
    assert_eq!(created["materialTypeId"], 2);
    assert!(created.get("material_name").is_none());

    let response = app.request(Method::GET, "/api/v1/materials", None).await;
    let body = response_json(response).await;
    assert_eq!(body["items"][0]["materialName"], "Lens");
    assert_eq!(body["pageSize"], 20);
}

#[tokio::test]
async fn routes_are_served_at_root_and_under_api_v1() {
    let app = TestApp::new().await;
    let seeded = app.seed_material("Shared", 1, 0).await;

    for uri in [
        format!("/api/v1/materials/{}", seeded.material_id),
        format!("/materials/{}", seeded.material_id),
    ] {
        let response = app.request(Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }

    let response = app.request(Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = app.request(Method::GET, "/health/ready", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["ready"], true);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::new().await;
    let response = app.request(Method::GET, "/api/v1/materials/77", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let header = response
        .headers()
        .get("x-request-id")
        .expect("request id header")
        .to_str()
        .unwrap()
        .to_string();
    let body = response_json(response).await;
    assert_eq!(body["request_id"], header);
}

#[tokio::test]
async fn service_errors_keep_their_variants() {
    use assert_matches::assert_matches;
    use materials_service::{dto::MaterialPayload, errors::ServiceError};

    let app = TestApp::new().await;
    let materials = app.state.services.materials.clone();

    assert_matches!(materials.get(31337).await, Err(ServiceError::NotFound(_)));
    assert_matches!(materials.delete(31337).await, Err(ServiceError::NotFound(_)));
    assert_matches!(materials.create(None).await, Err(ServiceError::ValidationError(_)));
    assert_matches!(
        materials
            .update(31337, Some(MaterialPayload::default()))
            .await,
        Err(ServiceError::NotFound(_))
    );

    let too_long = MaterialPayload {
        material_name: Some("x".repeat(256)),
        material_type_id: Some(1),
        ..Default::default()
    };
    assert_matches!(
        materials.create(Some(too_long)).await,
        Err(ServiceError::ValidationError(_))
    );
}
