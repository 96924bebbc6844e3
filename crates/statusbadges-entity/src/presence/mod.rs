//! Presence domain entities.

pub mod activity;
pub mod model;

pub use activity::{Activity, ActivityType};
pub use model::{GatewayPresence, PresenceRecord};

use serde::{Deserialize, Serialize};

/// Online status of a user as reported upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    /// Connected and active.
    Online,
    /// Connected but away from keyboard.
    Idle,
    /// Do not disturb.
    #[serde(rename = "dnd")]
    DoNotDisturb,
    /// Not connected. Invisible users are reported the same way.
    #[default]
    #[serde(alias = "invisible")]
    Offline,
}

impl PresenceStatus {
    /// Return the status as the upstream lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Idle => "idle",
            Self::DoNotDisturb => "dnd",
            Self::Offline => "offline",
        }
    }

    /// Collapse the "present but busy" states into `Online`.
    pub fn simplified(self) -> Self {
        match self {
            Self::Idle | Self::DoNotDisturb => Self::Online,
            other => other,
        }
    }
}

impl std::fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
