//! Integration tests for the redirect endpoints.

use http::{StatusCode, header};
use serde_json::json;

use statusbadges_entity::{Activity, ActivityType, PresenceRecord, PresenceStatus};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_root_redirects_to_landing_page() {
    let app = TestApp::new();
    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        Some(app.config.server.landing_url.as_str())
    );
}

#[tokio::test]
async fn test_open_spotify_redirects_to_track() {
    let app = TestApp::new();
    let response = app.get("/openspotify/u1").await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        Some("https://open.spotify.com/track/track123")
    );
}

#[tokio::test]
async fn test_open_spotify_without_track() {
    let app = TestApp::new();
    app.push_update(json!({
        "user": { "id": "u4" },
        "status": "online",
        "activities": [{ "type": 2, "name": "Spotify", "details": "Song", "state": "A", "sync_id": "" }],
    }));

    for id in ["u2", "u4", "nobody"] {
        let response = app.get(&format!("/openspotify/{id}")).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "This user isn't listening to Spotify.");
    }
}

#[tokio::test]
async fn test_open_spotify_follows_latest_track() {
    let app = TestApp::new();
    app.realtime.ingestor.on_presence_update(
        "u1".into(),
        PresenceRecord::new(
            PresenceStatus::Online,
            vec![
                Activity::new(ActivityType::Listening, "Spotify")
                    .with_details("Other Song")
                    .with_state("C")
                    .with_sync_id("track456"),
            ],
        ),
    );

    let response = app.get("/openspotify/u1").await;
    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        Some("https://open.spotify.com/track/track456")
    );
}
