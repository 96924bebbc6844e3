//! Event ingestion: decoded gateway events in, store writes out.

pub mod event;
pub mod ingestor;

pub use event::PresenceEvent;
pub use ingestor::EventIngestor;
