//! Raw presence handler.

use axum::Json;
use axum::extract::{Path, State};

use statusbadges_entity::PresenceRecord;

use crate::state::AppState;

/// GET /presence/{id}
///
/// Unknown users get the offline default rather than a 404.
pub async fn get_presence(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<PresenceRecord> {
    let record = state.realtime.store.lookup_or_default(&id);
    Json(PresenceRecord::clone(&record))
}
