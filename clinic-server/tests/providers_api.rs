mod support;

use axum::http::StatusCode;
use clinic_server::db::MemoryStore;
use serde_json::json;

use support::{seeded, TestApp};

#[tokio::test]
async fn list_returns_every_provider() {
    let app = TestApp::new(seeded());

    let (status, body) = app.get("/providers").await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        json!({
            "provider_id": 10,
            "first_name": "Maya",
            "last_name": "Cruz",
            "provider_specialty": "Cardiology"
        })
    );
}

#[tokio::test]
async fn list_of_empty_table_is_empty_array() {
    let app = TestApp::new(MemoryStore::new());

    let (status, body) = app.get("/providers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn filter_by_specialty() {
    let app = TestApp::new(seeded());

    let (status, body) = app.get("/providers/filter?specialty=Cardiology").await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|p| p["provider_specialty"] == "Cardiology"));
}

#[tokio::test]
async fn unknown_specialty_is_404() {
    let app = TestApp::new(seeded());

    let (status, body) = app.get("/providers/filter?specialty=Dermatology").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "message": "No providers found with that specialty" })
    );
}

#[tokio::test]
async fn missing_specialty_is_400_without_query() {
    let app = TestApp::new(seeded());

    for uri in ["/providers/filter", "/providers/filter?specialty="] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(
            body,
            json!({ "error": "Please provide a specialty to filter by" })
        );
    }

    assert_eq!(app.store.query_count(), 0);
}

#[tokio::test]
async fn store_failure_is_generic_500() {
    let app = TestApp::new(seeded().failing("pool timed out while waiting for an open connection"));

    for uri in ["/providers", "/providers/filter?specialty=Cardiology"] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body, json!({ "error": "Failed to retrieve providers" }));
        assert!(!body.to_string().contains("pool timed out"));
    }
}

#[tokio::test]
async fn health_does_not_touch_store() {
    let app = TestApp::new(seeded().failing("down"));

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(app.store.query_count(), 0);
}

#[tokio::test]
async fn old_shadowed_route_shape_is_not_served() {
    let app = TestApp::new(seeded());

    // Filtering lives under /filter; the list route ignores query parameters
    let (status, body) = app.get("/providers?specialty=Pediatrics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}
