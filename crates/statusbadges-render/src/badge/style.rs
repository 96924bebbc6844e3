//! Badge visual styles.

use serde::{Deserialize, Serialize};

/// One of the five supported badge styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeStyle {
    /// Rounded, gradient. The default.
    #[default]
    Flat,
    /// Square corners, no gradient.
    FlatSquare,
    /// Rounded, glossy, 18px tall.
    Plastic,
    /// Tall, uppercase.
    ForTheBadge,
    /// Social-network button look.
    Social,
}

impl BadgeStyle {
    /// Resolve a request's `style` value. Anything unrecognized, including
    /// absence, becomes [`BadgeStyle::Flat`].
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("flat") => Self::Flat,
            Some("flat-square") => Self::FlatSquare,
            Some("plastic") => Self::Plastic,
            Some("for-the-badge") => Self::ForTheBadge,
            Some("social") => Self::Social,
            _ => Self::Flat,
        }
    }

    /// The style name as used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::FlatSquare => "flat-square",
            Self::Plastic => "plastic",
            Self::ForTheBadge => "for-the-badge",
            Self::Social => "social",
        }
    }

    /// Whether the logo injector understands this style's geometry.
    pub fn supports_logo(&self) -> bool {
        matches!(self, Self::Flat | Self::FlatSquare | Self::Plastic)
    }
}

impl std::fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
