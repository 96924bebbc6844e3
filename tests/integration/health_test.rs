//! Integration tests for the health endpoint.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_store_size() {
    let app = TestApp::new();
    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["tracked_users"], 3);
    assert!(body["last_event_at"].is_string());
}
