//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Seconds since the state was built.
    pub uptime_seconds: u64,
    /// Users with a cached presence.
    pub tracked_users: usize,
    /// When the last presence event was applied.
    pub last_event_at: Option<DateTime<Utc>>,
}
