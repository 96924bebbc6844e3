//! Redirect handlers.

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use statusbadges_entity::ActivityType;
use statusbadges_render::badge::SPOTIFY_NAME;

use crate::state::AppState;

/// Body returned by `/openspotify/{id}` when there is nothing to open.
pub const NOT_LISTENING: &str = "This user isn't listening to Spotify.";

/// 302 Found to `location`.
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// GET /
pub async fn landing(State(state): State<AppState>) -> Response {
    found(state.config.server.landing_url.clone())
}

/// GET /openspotify/{id}
pub async fn open_spotify(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let track = state.realtime.store.lookup(&id).and_then(|record| {
        record
            .activities
            .iter()
            .filter(|a| a.name == SPOTIFY_NAME && a.kind == ActivityType::Listening)
            .find_map(|a| a.sync_id().map(str::to_string))
    });

    match track {
        Some(track) => found(format!(
            "{}{}",
            state.config.badges.spotify_track_url, track
        )),
        None => NOT_LISTENING.into_response(),
    }
}
