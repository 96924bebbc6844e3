//! Presence record value object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use statusbadges_core::types::UserId;

use super::{Activity, PresenceStatus};

/// The cached presence snapshot for one user.
///
/// The `Default` value is what every read path reports for a user the store
/// has never seen: offline, no surfaces, no activities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresenceRecord {
    /// Aggregate status.
    #[serde(default)]
    pub status: PresenceStatus,
    /// Per-surface status (`desktop`, `mobile`, `web`), passed through as-is.
    #[serde(default)]
    pub client_status: BTreeMap<String, PresenceStatus>,
    /// Running activities in upstream order.
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Unmodelled upstream fields, e.g. `guild_id`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PresenceRecord {
    /// Create a record with a status and activity list.
    pub fn new(status: PresenceStatus, activities: Vec<Activity>) -> Self {
        Self {
            status,
            activities,
            ..Self::default()
        }
    }
}

/// The user reference embedded in a gateway presence. Only the id is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialUser {
    /// User id.
    pub id: UserId,
}

/// A presence exactly as the gateway delivers it, before the user is
/// split off into the store key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayPresence {
    /// The user this presence belongs to.
    pub user: PartialUser,
    /// Everything else.
    #[serde(flatten)]
    pub record: PresenceRecord,
}

impl GatewayPresence {
    /// Split into store key and record, dropping the user object.
    pub fn into_parts(self) -> (UserId, PresenceRecord) {
        (self.user.id, self.record)
    }
}
