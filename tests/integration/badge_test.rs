//! Integration tests for the badge endpoints.

use http::{StatusCode, header};
use serde_json::json;

use crate::helpers::TestApp;

fn assert_svg_badge(response: &crate::helpers::TestResponse) {
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        Some("image/svg+xml; charset=utf-8")
    );
    assert_eq!(
        response.header(header::CACHE_CONTROL),
        Some("max-age=0, no-cache, no-store, must-revalidate")
    );
    assert!(response.body.starts_with("<svg"));
}

#[tokio::test]
async fn test_status_unknown_user_is_offline() {
    let app = TestApp::new();
    let response = app.get("/badge/status/nobody").await;

    assert_svg_badge(&response);
    assert!(response.body.contains(">currently</text>"));
    assert!(response.body.contains(">offline</text>"));
    assert!(response.body.contains(r##"fill="#9f9f9f""##));
}

#[tokio::test]
async fn test_status_simple_flag() {
    let app = TestApp::new();

    let raw = app.get("/badge/status/u2").await;
    assert!(raw.body.contains(">idle</text>"));

    let simple = app.get("/badge/status/u2?simple=true").await;
    assert!(simple.body.contains(">online</text>"));

    let not_literal = app.get("/badge/status/u2?simple=1").await;
    assert!(not_literal.body.contains(">idle</text>"));
}

#[tokio::test]
async fn test_status_overrides() {
    let app = TestApp::new();
    let response = app
        .get("/badge/status/u1?label=discord&color=blue&labelColor=black&style=flat-square")
        .await;

    assert_svg_badge(&response);
    assert!(response.body.contains(">discord</text>"));
    assert!(response.body.contains(r##"fill="#007ec6""##));
    assert!(response.body.contains(r##"fill="black""##));
    assert!(response.body.contains(r#"shape-rendering="crispEdges""#));
}

#[tokio::test]
async fn test_unknown_style_renders_flat() {
    let app = TestApp::new();
    let flat = app.get("/badge/status/u1?style=flat").await;
    let bogus = app.get("/badge/status/u1?style=popout").await;
    assert_eq!(flat.body, bogus.body);
}

#[tokio::test]
async fn test_playing_joins_two_names() {
    let app = TestApp::new();
    let response = app.get("/badge/playing/u1").await;

    assert_svg_badge(&response);
    assert!(response.body.contains(">Foo and Bar</text>"));
    assert!(response.body.contains(">playing</text>"));
}

#[tokio::test]
async fn test_playing_fallback() {
    let app = TestApp::new();

    let custom = app.get("/badge/playing/u2?fallback=afk").await;
    assert!(custom.body.contains(">afk</text>"));

    let empty = app.get("/badge/playing/u2?fallback=").await;
    assert!(empty.body.contains(">nothing rn</text>"));

    let unknown = app.get("/badge/playing/nobody").await;
    assert!(unknown.body.contains(">nothing rn</text>"));
}

#[tokio::test]
async fn test_vscode_badge_with_logo() {
    let app = TestApp::new();
    let with_logo = app.get("/badge/vscode/u1").await;
    let without_logo = app.get("/badge/vscode/u1?hideLogo=true").await;

    assert_svg_badge(&with_logo);
    assert!(with_logo.body.contains(">main.rs in statusbadges</text>"));
    assert!(with_logo.body.contains("xlink:href=\"data:image/svg+xml;base64,"));
    assert!(!without_logo.body.contains("<image"));
    assert_eq!(with_logo.svg_width(), without_logo.svg_width() + 17);
}

#[tokio::test]
async fn test_logo_skipped_for_unsupported_styles() {
    let app = TestApp::new();

    let social = app.get("/badge/vscode/u1?style=social").await;
    assert_svg_badge(&social);
    assert!(!social.body.contains("<image"));

    let big = app.get("/badge/vscode/u1?style=for-the-badge").await;
    assert_svg_badge(&big);
    assert!(!big.body.contains("<image"));
    assert!(big.body.contains(">MAIN.RS IN STATUSBADGES</text>"));
}

#[tokio::test]
async fn test_logo_on_plastic_and_flat_square() {
    let app = TestApp::new();
    for style in ["plastic", "flat-square"] {
        let response = app.get(&format!("/badge/spotify/u1?style={style}")).await;
        assert_svg_badge(&response);
        assert!(response.body.contains("<image"), "{style}");
    }
}

#[tokio::test]
async fn test_intellij_idling_falls_back() {
    let app = TestApp::new();
    let response = app.get("/badge/intellij/u3?fallback=offline").await;

    assert_svg_badge(&response);
    assert!(response.body.contains(">offline</text>"));
    assert!(response.body.contains(">coding</text>"));
}

#[tokio::test]
async fn test_spotify_and_crunchyroll_messages() {
    let app = TestApp::new();

    let spotify = app.get("/badge/spotify/u1").await;
    assert!(spotify.body.contains(">Song  by A and B</text>"));
    assert!(spotify.body.contains(">listening to</text>"));

    let crunchyroll = app.get("/badge/crunchyroll/u3").await;
    assert!(crunchyroll.body.contains(">Frieren</text>"));
    assert!(crunchyroll.body.contains(">watching</text>"));
}

#[tokio::test]
async fn test_update_replaces_record() {
    let app = TestApp::new();
    app.push_update(json!({
        "user": { "id": "u1" },
        "status": "dnd",
        "activities": [{ "type": 0, "name": "Baz" }],
    }));

    let playing = app.get("/badge/playing/u1").await;
    assert!(playing.body.contains(">Baz</text>"));

    let vscode = app.get("/badge/vscode/u1").await;
    assert!(vscode.body.contains(">nothing rn</text>"));

    let status = app.get("/badge/status/u1").await;
    assert!(status.body.contains(">dnd</text>"));
}

#[tokio::test]
async fn test_unknown_badge_kind_is_not_found() {
    let app = TestApp::new();
    let response = app.get("/badge/youtube/u1").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_repeated_query_key_uses_first_value() {
    let app = TestApp::new();
    let repeated = app.get("/badge/status/u1?style=flat&style=plastic").await;
    let flat = app.get("/badge/status/u1?style=flat").await;

    assert_svg_badge(&repeated);
    assert_eq!(repeated.body, flat.body);
}

#[tokio::test]
async fn test_playing_skips_intellij() {
    let app = TestApp::new();
    let response = app.get("/badge/playing/u3?fallback=afk").await;

    assert_svg_badge(&response);
    assert!(response.body.contains(">afk</text>"));
    assert!(!response.body.contains("IntelliJ"));
}
