//! Presence gateway connection configuration.

use serde::{Deserialize, Serialize};

/// `GUILDS | GUILD_PRESENCES`.
const DEFAULT_INTENTS: u64 = (1 << 0) | (1 << 8);

/// Settings for the websocket connection that feeds the presence store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Whether to connect at all. Disabled deployments serve an empty store.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Bot token sent in the identify payload.
    #[serde(default)]
    pub token: String,
    /// Gateway websocket URL, including version and encoding query.
    #[serde(default = "default_url")]
    pub url: String,
    /// Intent bitmask sent in the identify payload.
    #[serde(default = "default_intents")]
    pub intents: u64,
    /// Capacity of the channel between the gateway reader and the ingestor.
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
    /// Reconnect backoff policy.
    #[serde(default)]
    pub reconnect: ReconnectConfig,
}

/// Exponential backoff applied between reconnect attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconnectConfig {
    /// Delay before the first retry, in milliseconds.
    #[serde(default = "default_base_ms")]
    pub base_ms: u64,
    /// Multiplier applied per consecutive failure.
    #[serde(default = "default_factor")]
    pub factor: f64,
    /// Relative jitter in `[0, 1)`; `0.2` means ±20%.
    #[serde(default = "default_jitter")]
    pub jitter: f64,
    /// Upper bound on a single delay, in milliseconds.
    #[serde(default = "default_cap_ms")]
    pub cap_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            token: String::new(),
            url: default_url(),
            intents: default_intents(),
            event_buffer: default_event_buffer(),
            reconnect: ReconnectConfig::default(),
        }
    }
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            base_ms: default_base_ms(),
            factor: default_factor(),
            jitter: default_jitter(),
            cap_ms: default_cap_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_url() -> String {
    "wss://gateway.discord.gg/?v=10&encoding=json".to_string()
}

fn default_intents() -> u64 {
    DEFAULT_INTENTS
}

fn default_event_buffer() -> usize {
    1024
}

fn default_base_ms() -> u64 {
    1_000
}

fn default_factor() -> f64 {
    2.0
}

fn default_jitter() -> f64 {
    0.2
}

fn default_cap_ms() -> u64 {
    60_000
}
