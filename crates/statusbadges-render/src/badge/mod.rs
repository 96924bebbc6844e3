//! Badge composition: which activity a badge shows and how it is worded.

pub mod composer;
pub mod format;
pub mod params;
pub mod style;

pub use composer::BadgeComposer;
pub use params::BadgeParams;
pub use style::BadgeStyle;

use serde::Serialize;

/// Name of the first IDE integration.
pub const VSCODE_NAME: &str = "Visual Studio Code";
/// Name of the second IDE integration.
pub const INTELLIJ_NAME: &str = "IntelliJ IDEA Ultimate";
/// `state` the IntelliJ integration reports while nothing is open.
pub const INTELLIJ_IDLE_STATE: &str = "Idling";
/// Activity name of the music integration.
pub const SPOTIFY_NAME: &str = "Spotify";
/// Activity name of the video integration.
pub const CRUNCHYROLL_NAME: &str = "Crunchyroll";

/// The badge endpoints, one per selection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    /// Online status.
    Status,
    /// Games and other applications.
    Playing,
    /// Visual Studio Code.
    Vscode,
    /// IntelliJ IDEA.
    Intellij,
    /// Spotify.
    Spotify,
    /// Crunchyroll.
    Crunchyroll,
}

impl BadgeKind {
    /// Every kind, in route order.
    pub const ALL: [BadgeKind; 6] = [
        Self::Status,
        Self::Playing,
        Self::Vscode,
        Self::Intellij,
        Self::Spotify,
        Self::Crunchyroll,
    ];

    /// Look a kind up by its path segment. Matching is exact.
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == segment)
    }

    /// Path segment under `/badge/`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Playing => "playing",
            Self::Vscode => "vscode",
            Self::Intellij => "intellij",
            Self::Spotify => "spotify",
            Self::Crunchyroll => "crunchyroll",
        }
    }

    /// Label used when the request gives none.
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::Status => "currently",
            Self::Playing => "playing",
            Self::Vscode | Self::Intellij => "coding",
            Self::Spotify => "listening to",
            Self::Crunchyroll => "watching",
        }
    }

    /// Brand color of the message half. `None` for status, whose color
    /// depends on the status itself.
    pub fn default_color(&self) -> Option<&'static str> {
        match self {
            Self::Status => None,
            Self::Playing => Some("#5865f2"),
            Self::Vscode => Some("#23a7f2"),
            Self::Intellij => Some("#fe315d"),
            Self::Spotify => Some("#1db954"),
            Self::Crunchyroll => Some("#f47521"),
        }
    }

    /// Whether this kind carries a brand logo.
    pub fn has_logo(&self) -> bool {
        matches!(
            self,
            Self::Vscode | Self::Intellij | Self::Spotify | Self::Crunchyroll
        )
    }
}

impl std::fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the renderer needs to draw one badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeSpec {
    /// Left-hand text.
    pub label: String,
    /// Right-hand text.
    pub message: String,
    /// Left-hand background.
    pub label_color: String,
    /// Right-hand background.
    pub message_color: String,
    /// Visual style.
    pub style: BadgeStyle,
}
