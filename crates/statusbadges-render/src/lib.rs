//! # statusbadges-render
//!
//! Turns cached presence into badge images:
//!
//! - [`badge`]: the per-kind composer mapping a presence record and request
//!   parameters to a [`BadgeSpec`]
//! - [`svg`]: the shields-style SVG renderer and the logo injection post-processor
//! - [`logos`]: bundled brand glyphs, base64-encoded for inline embedding

pub mod badge;
pub mod error;
pub mod logos;
pub mod svg;

pub use badge::{BadgeComposer, BadgeKind, BadgeParams, BadgeSpec, BadgeStyle};
pub use error::InjectError;
pub use logos::LogoSet;
pub use svg::{BadgeRenderer, ShieldsRenderer, inject_logo};
