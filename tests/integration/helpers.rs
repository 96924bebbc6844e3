//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use statusbadges_api::{AppState, build_app};
use statusbadges_core::config::AppConfig;
use statusbadges_entity::GatewayPresence;
use statusbadges_realtime::RealtimeEngine;

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// Engine behind the router, for feeding events mid-test
    pub realtime: RealtimeEngine,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application seeded with [`fixture_guild`]
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.gateway.enabled = false;

        let realtime = RealtimeEngine::new();
        let presences = fixture_guild()
            .into_iter()
            .map(|raw| {
                serde_json::from_value::<GatewayPresence>(raw)
                    .expect("fixture presence should decode")
                    .into_parts()
            })
            .collect();
        realtime.ingestor.on_group_snapshot(Some("g1"), presences);

        let router = build_app(AppState::new(config.clone(), realtime.clone()));

        Self {
            router,
            realtime,
            config,
        }
    }

    /// Push a single presence update, as the gateway would
    pub fn push_update(&self, raw: Value) {
        let (user_id, record) = serde_json::from_value::<GatewayPresence>(raw)
            .expect("update should decode")
            .into_parts();
        self.realtime.ingestor.on_presence_update(user_id, record);
    }

    /// Make a GET request to the test app
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8(body_bytes.to_vec()).expect("body should be UTF-8"),
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub body: String,
}

impl TestResponse {
    /// A header as a string, if present
    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body parsed as JSON
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("body should be JSON")
    }

    /// The badge's declared width, the first `width="N"` in the markup
    pub fn svg_width(&self) -> u32 {
        let start = self.body.find("width=\"").expect("no width attribute") + 7;
        let end = start + self.body[start..].find('"').expect("unterminated width");
        self.body[start..end].parse().expect("width should be numeric")
    }
}

/// Presences as a `GUILD_CREATE` would carry them.
///
/// - `u1`: online, playing Foo and Bar, coding in VS Code, on Spotify
/// - `u2`: idle, nothing running
/// - `u3`: dnd, watching Crunchyroll, IntelliJ idling
pub fn fixture_guild() -> Vec<Value> {
    vec![
        json!({
            "user": { "id": "u1" },
            "guild_id": "g1",
            "status": "online",
            "client_status": { "desktop": "online" },
            "activities": [
                { "type": 0, "name": "Foo" },
                {
                    "type": 0,
                    "name": "Visual Studio Code",
                    "details": "Editing main.rs",
                    "state": "Workspace: statusbadges",
                },
                { "type": 0, "name": "Bar", "timestamps": { "start": 1700000000000u64 } },
                {
                    "type": 2,
                    "name": "Spotify",
                    "details": "Song (Remix)",
                    "state": "A; B",
                    "sync_id": "track123",
                },
            ],
        }),
        json!({
            "user": { "id": "u2" },
            "status": "idle",
            "activities": [],
        }),
        json!({
            "user": { "id": "u3" },
            "status": "dnd",
            "client_status": { "mobile": "dnd" },
            "activities": [
                { "type": 3, "name": "Crunchyroll", "details": "Frieren", "state": "Episode 3" },
                {
                    "type": 0,
                    "name": "IntelliJ IDEA Ultimate",
                    "details": "Editing Main.kt",
                    "state": "Idling",
                },
            ],
        }),
    ]
}
