//! The two event kinds the store is fed with.

use statusbadges_core::types::UserId;
use statusbadges_entity::PresenceRecord;

/// A decoded presence event handed over by the gateway adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenceEvent {
    /// Every presence currently visible in a group the session just joined.
    GroupSnapshot {
        /// Upstream group id, for logging only.
        group_id: Option<String>,
        /// User id → record pairs.
        presences: Vec<(UserId, PresenceRecord)>,
    },
    /// A single user's new presence.
    PresenceUpdate {
        /// Whose presence changed.
        user_id: UserId,
        /// The replacement record.
        record: PresenceRecord,
    },
}
