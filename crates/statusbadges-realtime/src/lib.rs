//! # statusbadges-realtime
//!
//! Live presence state for StatusBadges. Provides:
//!
//! - The shared [`PresenceStore`] (concurrent, memory-only, never evicts)
//! - The [`EventIngestor`] that applies group snapshots and single updates
//! - A websocket [`GatewayClient`] that decodes upstream presence dispatches
//! - The [`RealtimeEngine`] that wires the three together at startup

pub mod engine;
pub mod gateway;
pub mod ingest;
pub mod presence;

pub use engine::RealtimeEngine;
pub use gateway::GatewayClient;
pub use ingest::{EventIngestor, PresenceEvent};
pub use presence::PresenceStore;
