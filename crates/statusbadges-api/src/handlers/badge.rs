//! Badge handlers.

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use statusbadges_core::error::AppError;
use statusbadges_render::{BadgeComposer, BadgeKind, BadgeParams, inject_logo};

use crate::state::AppState;

/// `Content-Type` of every badge.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml; charset=utf-8";
/// `Cache-Control` of every badge; badges must always reflect live presence.
pub const NO_CACHE: &str = "max-age=0, no-cache, no-store, must-revalidate";

/// GET /badge/{kind}/{id}
pub async fn badge(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let params = BadgeParams::from_pairs(pairs);
    let kind = BadgeKind::from_segment(&kind)
        .ok_or_else(|| AppError::not_found(format!("Unknown badge kind '{kind}'")))?;

    let svg = render_badge(&state, kind, &id, &params)?;

    Ok((
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
            (header::CACHE_CONTROL, NO_CACHE),
        ],
        svg,
    )
        .into_response())
}

/// Compose, render and, where the kind and style allow it, add the logo.
pub fn render_badge(
    state: &AppState,
    kind: BadgeKind,
    id: &str,
    params: &BadgeParams,
) -> Result<String, AppError> {
    let record = state.realtime.store.lookup(id);
    let spec = state.composer.compose(kind, record.as_deref(), params);
    let svg = state.renderer.render(&spec);

    if !BadgeComposer::wants_logo(kind, &spec, params) {
        return Ok(svg);
    }
    match state.logos.for_kind(kind) {
        Some(logo) => Ok(inject_logo(&svg, logo)?),
        None => Ok(svg),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use statusbadges_core::config::AppConfig;
    use statusbadges_core::error::ErrorKind;
    use statusbadges_entity::{Activity, ActivityType, PresenceRecord, PresenceStatus};
    use statusbadges_realtime::RealtimeEngine;
    use statusbadges_render::{BadgeRenderer, BadgeSpec};

    #[derive(Debug)]
    struct TruncatedRenderer;

    impl BadgeRenderer for TruncatedRenderer {
        fn render(&self, _spec: &BadgeSpec) -> String {
            "<svg/>".to_string()
        }
    }

    fn state() -> AppState {
        let realtime = RealtimeEngine::new();
        realtime.store.update(
            "u1".into(),
            PresenceRecord::new(
                PresenceStatus::Online,
                vec![Activity::new(ActivityType::Watching, "Crunchyroll").with_details("Frieren")],
            ),
        );
        AppState::new(AppConfig::default(), realtime)
    }

    #[test]
    fn test_logo_only_for_logo_kinds() {
        let state = state();
        let params = BadgeParams::default();

        let watching = render_badge(&state, BadgeKind::Crunchyroll, "u1", &params).unwrap();
        assert!(watching.contains("<image"));

        let status = render_badge(&state, BadgeKind::Status, "u1", &params).unwrap();
        assert!(!status.contains("<image"));
    }

    #[test]
    fn test_malformed_render_fails_the_request() {
        let mut state = state();
        state.renderer = Arc::new(TruncatedRenderer);
        let params = BadgeParams::default();

        let err = render_badge(&state, BadgeKind::Crunchyroll, "u1", &params).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Render);

        // No logo requested, so the markup is passed through untouched.
        let hidden = BadgeParams {
            hide_logo: Some("true".to_string()),
            ..BadgeParams::default()
        };
        assert_eq!(
            render_badge(&state, BadgeKind::Crunchyroll, "u1", &hidden).unwrap(),
            "<svg/>"
        );
    }
}
