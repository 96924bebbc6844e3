//! Presence store: the shared, memory-only cache of presence records.

use std::sync::Arc;

use dashmap::DashMap;

use statusbadges_core::types::UserId;
use statusbadges_entity::PresenceRecord;

/// Concurrent map from user id to that user's latest presence record.
///
/// Records are stored behind an `Arc` and replaced wholesale, so a reader
/// holds a shard lock only long enough to clone a pointer and always sees
/// either the previous or the next record for a key, never a mix.
///
/// Entries are never evicted; a user who stops appearing upstream keeps
/// their last reported record until the process exits.
#[derive(Debug, Default)]
pub struct PresenceStore {
    /// User ID → latest record
    records: DashMap<UserId, Arc<PresenceRecord>>,
}

impl PresenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Overwrite the entry for every key in the batch.
    ///
    /// Keys not in the batch are left alone: this merges across keys, it
    /// does not clear the store first.
    pub fn bulk_load<I>(&self, records: I) -> usize
    where
        I: IntoIterator<Item = (UserId, PresenceRecord)>,
    {
        let mut written = 0;
        for (user_id, record) in records {
            self.records.insert(user_id, Arc::new(record));
            written += 1;
        }
        written
    }

    /// Overwrite the entry for a single key
    pub fn update(&self, user_id: UserId, record: PresenceRecord) {
        self.records.insert(user_id, Arc::new(record));
    }

    /// Get the latest record for a user, if one was ever written
    pub fn lookup(&self, user_id: &str) -> Option<Arc<PresenceRecord>> {
        self.records.get(user_id).map(|r| Arc::clone(r.value()))
    }

    /// Get the latest record, substituting the offline default when absent
    pub fn lookup_or_default(&self, user_id: &str) -> Arc<PresenceRecord> {
        self.lookup(user_id)
            .unwrap_or_else(|| Arc::new(PresenceRecord::default()))
    }

    /// Number of users with a cached record
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
