//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use statusbadges_core::config::AppConfig;
use statusbadges_realtime::RealtimeEngine;
use statusbadges_render::{BadgeComposer, BadgeRenderer, LogoSet, ShieldsRenderer};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Presence store and its writer
    pub realtime: RealtimeEngine,
    /// Presence → badge spec
    pub composer: Arc<BadgeComposer>,
    /// Badge spec → SVG
    pub renderer: Arc<dyn BadgeRenderer>,
    /// Encoded brand logos
    pub logos: Arc<LogoSet>,
    /// Process start, for uptime
    pub started_at: Instant,
}

impl AppState {
    /// Build state around `realtime` with the default renderer and bundled logos.
    pub fn new(config: AppConfig, realtime: RealtimeEngine) -> Self {
        let composer = BadgeComposer::new(&config.badges);
        Self {
            config: Arc::new(config),
            realtime,
            composer: Arc::new(composer),
            renderer: Arc::new(ShieldsRenderer::new()),
            logos: Arc::new(LogoSet::bundled()),
            started_at: Instant::now(),
        }
    }
}
