//! Integration tests for the raw presence endpoint.

use http::{StatusCode, header};
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_unknown_user_gets_offline_document() {
    let app = TestApp::new();
    let response = app.get("/presence/unknown_id").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .header(header::CONTENT_TYPE)
            .is_some_and(|ct| ct.starts_with("application/json"))
    );
    assert_eq!(
        response.json(),
        json!({ "status": "offline", "client_status": {}, "activities": [] })
    );
}

#[tokio::test]
async fn test_cached_presence_is_scrubbed_and_passed_through() {
    let app = TestApp::new();
    let body = app.get("/presence/u1").await.json();

    assert!(body.get("user").is_none());
    assert_eq!(body["status"], "online");
    assert_eq!(body["guild_id"], "g1");
    assert_eq!(body["client_status"], json!({ "desktop": "online" }));
    assert_eq!(body["activities"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["activities"][2]["timestamps"]["start"], 1700000000000u64);
    assert_eq!(body["activities"][3]["sync_id"], "track123");
}
