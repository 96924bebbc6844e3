//! # statusbadges-core
//!
//! Core crate for StatusBadges. Contains configuration schemas, the
//! identity key newtype, and the unified error system.
//!
//! This crate has **no** internal dependencies on other StatusBadges crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
