//! Event ingestor: routes decoded gateway events into the presence store.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use statusbadges_core::types::UserId;
use statusbadges_entity::PresenceRecord;

use super::event::PresenceEvent;
use crate::presence::PresenceStore;

/// Feeds the presence store.
///
/// The two `on_*` intake functions are plain synchronous calls; [`run`]
/// is the adapter that drives them from the gateway's channel.
///
/// [`run`]: EventIngestor::run
#[derive(Debug)]
pub struct EventIngestor {
    /// Store being written to
    store: Arc<PresenceStore>,
    /// Events applied so far
    events_applied: AtomicU64,
    /// Unix millis of the last applied event, 0 before the first
    last_event_ms: AtomicI64,
}

impl EventIngestor {
    /// Create an ingestor writing into `store`
    pub fn new(store: Arc<PresenceStore>) -> Self {
        Self {
            store,
            events_applied: AtomicU64::new(0),
            last_event_ms: AtomicI64::new(0),
        }
    }

    /// Apply a group snapshot: every pair overwrites its key, nothing else changes.
    pub fn on_group_snapshot(
        &self,
        group_id: Option<&str>,
        presences: Vec<(UserId, PresenceRecord)>,
    ) {
        let written = self.store.bulk_load(presences);
        debug!(
            group_id = group_id.unwrap_or("-"),
            presences = written,
            "Applied group snapshot"
        );
        self.mark_applied();
    }

    /// Apply a single presence update.
    pub fn on_presence_update(&self, user_id: UserId, record: PresenceRecord) {
        self.store.update(user_id, record);
        self.mark_applied();
    }

    /// Dispatch one event to the matching intake function.
    pub fn apply(&self, event: PresenceEvent) {
        match event {
            PresenceEvent::GroupSnapshot {
                group_id,
                presences,
            } => self.on_group_snapshot(group_id.as_deref(), presences),
            PresenceEvent::PresenceUpdate { user_id, record } => {
                self.on_presence_update(user_id, record)
            }
        }
    }

    /// Drain `events` until the sender side closes or shutdown is signalled.
    pub async fn run(
        &self,
        mut events: mpsc::Receiver<PresenceEvent>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        info!("Presence ingestor started");

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Presence ingestor received shutdown signal");
                        break;
                    }
                }
                event = events.recv() => match event {
                    Some(event) => self.apply(event),
                    None => {
                        info!("Presence event channel closed");
                        break;
                    }
                },
            }
        }

        info!(
            events_applied = self.events_applied(),
            tracked_users = self.store.len(),
            "Presence ingestor stopped"
        );
    }

    /// Total events applied
    pub fn events_applied(&self) -> u64 {
        self.events_applied.load(Ordering::Relaxed)
    }

    /// When the last event was applied, if any
    pub fn last_event_at(&self) -> Option<DateTime<Utc>> {
        match self.last_event_ms.load(Ordering::Relaxed) {
            0 => None,
            ms => DateTime::from_timestamp_millis(ms),
        }
    }

    fn mark_applied(&self) {
        self.events_applied.fetch_add(1, Ordering::Relaxed);
        self.last_event_ms
            .store(Utc::now().timestamp_millis(), Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statusbadges_entity::{Activity, ActivityType, PresenceStatus};

    fn setup() -> (Arc<PresenceStore>, EventIngestor) {
        let store = Arc::new(PresenceStore::new());
        let ingestor = EventIngestor::new(Arc::clone(&store));
        (store, ingestor)
    }

    #[test]
    fn test_snapshot_then_update_sequence() {
        let (store, ingestor) = setup();
        let idle_foo = PresenceRecord::new(
            PresenceStatus::Idle,
            vec![Activity::new(ActivityType::Playing, "Foo")],
        );

        ingestor.on_presence_update("u1".into(), idle_foo.clone());
        ingestor.on_group_snapshot(
            Some("g1"),
            vec![(
                "u2".into(),
                PresenceRecord::new(PresenceStatus::Online, vec![]),
            )],
        );

        assert_eq!(*store.lookup("u1").unwrap(), idle_foo);
        assert_eq!(store.lookup("u2").unwrap().status, PresenceStatus::Online);
        assert_eq!(ingestor.events_applied(), 2);
        assert!(ingestor.last_event_at().is_some());
    }

    #[test]
    fn test_no_events_means_no_timestamp() {
        let (_, ingestor) = setup();
        assert_eq!(ingestor.events_applied(), 0);
        assert!(ingestor.last_event_at().is_none());
    }

    #[tokio::test]
    async fn test_run_drains_until_sender_dropped() {
        let (store, ingestor) = setup();
        let (tx, rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        tx.send(PresenceEvent::PresenceUpdate {
            user_id: "u1".into(),
            record: PresenceRecord::new(PresenceStatus::DoNotDisturb, vec![]),
        })
        .await
        .unwrap();
        tx.send(PresenceEvent::GroupSnapshot {
            group_id: None,
            presences: vec![("u2".into(), PresenceRecord::default())],
        })
        .await
        .unwrap();
        drop(tx);

        ingestor.run(rx, shutdown_rx).await;

        assert_eq!(
            store.lookup("u1").unwrap().status,
            PresenceStatus::DoNotDisturb
        );
        assert!(store.lookup("u2").is_some());
        assert_eq!(ingestor.events_applied(), 2);
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown() {
        let (_, ingestor) = setup();
        let (_tx, rx) = mpsc::channel::<PresenceEvent>(1);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        shutdown_tx.send(true).unwrap();
        ingestor.run(rx, shutdown_rx).await;
        assert_eq!(ingestor.events_applied(), 0);
    }
}
