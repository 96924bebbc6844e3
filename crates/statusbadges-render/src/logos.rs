//! Brand glyphs shown on the per-application badges.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::badge::BadgeKind;

const VSCODE_SVG: &str = include_str!("../assets/logos/vscode.svg");
const INTELLIJ_SVG: &str = include_str!("../assets/logos/intellij.svg");
const SPOTIFY_SVG: &str = include_str!("../assets/logos/spotify.svg");
const CRUNCHYROLL_SVG: &str = include_str!("../assets/logos/crunchyroll.svg");

/// The bundled logos, base64-encoded once for inline `data:` URIs.
#[derive(Debug, Clone)]
pub struct LogoSet {
    vscode: String,
    intellij: String,
    spotify: String,
    crunchyroll: String,
}

impl LogoSet {
    /// Encode the bundled glyphs.
    pub fn bundled() -> Self {
        Self {
            vscode: encode(VSCODE_SVG),
            intellij: encode(INTELLIJ_SVG),
            spotify: encode(SPOTIFY_SVG),
            crunchyroll: encode(CRUNCHYROLL_SVG),
        }
    }

    /// The encoded logo for `kind`, if that kind has one.
    pub fn for_kind(&self, kind: BadgeKind) -> Option<&str> {
        match kind {
            BadgeKind::Vscode => Some(&self.vscode),
            BadgeKind::Intellij => Some(&self.intellij),
            BadgeKind::Spotify => Some(&self.spotify),
            BadgeKind::Crunchyroll => Some(&self.crunchyroll),
            BadgeKind::Status | BadgeKind::Playing => None,
        }
    }
}

impl Default for LogoSet {
    fn default() -> Self {
        Self::bundled()
    }
}

fn encode(svg: &str) -> String {
    BASE64.encode(svg.trim_end().as_bytes())
}
