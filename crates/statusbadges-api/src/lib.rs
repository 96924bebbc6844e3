//! # statusbadges-api
//!
//! HTTP API layer for StatusBadges built on Axum.
//!
//! Serves the badge endpoints, the raw presence view, the Spotify and
//! landing redirects, and a health check, wrapped in CORS, compression and
//! request logging middleware.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
