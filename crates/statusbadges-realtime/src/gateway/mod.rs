//! Websocket adapter for the upstream presence gateway.
//!
//! Owns connection, heartbeat, identify/resume, and reconnect policy, and
//! hands decoded [`PresenceEvent`]s to the ingestor over a channel. Nothing
//! here touches the store directly.
//!
//! [`PresenceEvent`]: crate::ingest::PresenceEvent

pub mod backoff;
pub mod client;
pub mod error;
pub mod protocol;

pub use client::GatewayClient;
pub use error::GatewayError;
