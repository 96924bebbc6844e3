//! SVG output: the badge renderer and the logo post-processor.

pub mod color;
pub mod logo;
pub mod metrics;
pub mod renderer;

pub use logo::inject_logo;
pub use renderer::ShieldsRenderer;

use crate::badge::BadgeSpec;

/// Draws a badge spec as standalone SVG markup.
pub trait BadgeRenderer: Send + Sync + std::fmt::Debug {
    /// Render `spec`. Must be a pure function of its input.
    fn render(&self, spec: &BadgeSpec) -> String;
}
