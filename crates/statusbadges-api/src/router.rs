//! Route definitions for the StatusBadges HTTP API.

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route and the shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::redirect::landing))
        .route("/health", get(handlers::health::health))
        .route("/presence/{id}", get(handlers::presence::get_presence))
        .route("/openspotify/{id}", get(handlers::redirect::open_spotify))
        .route("/badge/{kind}/{id}", get(handlers::badge::badge))
        .with_state(state)
}
