//! Badge rendering defaults.

use serde::{Deserialize, Serialize};

/// Defaults applied when a badge request leaves a field unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgesConfig {
    /// Message used when nothing matches and no `fallback` is given.
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
    /// Label background color.
    #[serde(default = "default_label_color")]
    pub default_label_color: String,
    /// Prefix for `/openspotify/{id}` redirects; the track id is appended.
    #[serde(default = "default_spotify_track_url")]
    pub spotify_track_url: String,
}

impl Default for BadgesConfig {
    fn default() -> Self {
        Self {
            fallback_message: default_fallback_message(),
            default_label_color: default_label_color(),
            spotify_track_url: default_spotify_track_url(),
        }
    }
}

fn default_fallback_message() -> String {
    "nothing rn".to_string()
}

fn default_label_color() -> String {
    "gray".to_string()
}

fn default_spotify_track_url() -> String {
    "https://open.spotify.com/track/".to_string()
}
