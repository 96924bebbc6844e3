//! # statusbadges-entity
//!
//! Domain value types for StatusBadges. Every struct in this crate is a
//! snapshot of upstream presence data and round-trips through the gateway's
//! JSON encoding without losing fields it does not interpret.

pub mod presence;

pub use presence::{Activity, ActivityType, GatewayPresence, PresenceRecord, PresenceStatus};
