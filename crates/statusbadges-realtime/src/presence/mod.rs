//! Shared presence cache.

pub mod store;

pub use store::PresenceStore;
