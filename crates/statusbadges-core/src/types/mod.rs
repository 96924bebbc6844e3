//! Core type definitions used across the StatusBadges workspace.

pub mod id;

pub use id::UserId;
