//! Activities reported alongside a presence.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of activity, encoded upstream as a small integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ActivityType {
    /// `0`: playing a game or running an application.
    Playing,
    /// `1`: streaming.
    Streaming,
    /// `2`: listening to music.
    Listening,
    /// `3`: watching video.
    Watching,
    /// `4`: custom status.
    Custom,
    /// `5`: competing.
    Competing,
    /// A code this build does not know about, kept verbatim.
    Unknown(u8),
}

impl From<u8> for ActivityType {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Playing,
            1 => Self::Streaming,
            2 => Self::Listening,
            3 => Self::Watching,
            4 => Self::Custom,
            5 => Self::Competing,
            other => Self::Unknown(other),
        }
    }
}

impl From<ActivityType> for u8 {
    fn from(kind: ActivityType) -> Self {
        match kind {
            ActivityType::Playing => 0,
            ActivityType::Streaming => 1,
            ActivityType::Listening => 2,
            ActivityType::Watching => 3,
            ActivityType::Custom => 4,
            ActivityType::Competing => 5,
            ActivityType::Unknown(other) => other,
        }
    }
}

/// One concurrently running activity.
///
/// Fields the badges never read (timestamps, assets, party, ...) are kept in
/// `extra` so the raw presence endpoint can echo them back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity kind.
    #[serde(rename = "type")]
    pub kind: ActivityType,
    /// Application or service name.
    #[serde(default)]
    pub name: String,
    /// What the user is doing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Current party or sub-status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// External resource id, e.g. a track id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_id: Option<String>,
    /// Unmodelled upstream fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Activity {
    /// Create an activity with only a kind and a name.
    pub fn new(kind: ActivityType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            details: None,
            state: None,
            sync_id: None,
            extra: Map::new(),
        }
    }

    /// Builder-style setter for `details`.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Builder-style setter for `state`.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Builder-style setter for `sync_id`.
    pub fn with_sync_id(mut self, sync_id: impl Into<String>) -> Self {
        self.sync_id = Some(sync_id.into());
        self
    }

    /// `details`, treating an empty string as absent.
    pub fn details(&self) -> Option<&str> {
        non_empty(&self.details)
    }

    /// `state`, treating an empty string as absent.
    pub fn state(&self) -> Option<&str> {
        non_empty(&self.state)
    }

    /// `sync_id`, treating an empty string as absent.
    pub fn sync_id(&self) -> Option<&str> {
        non_empty(&self.sync_id)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_keeps_unknown_fields() {
        let raw = serde_json::json!({
            "type": 2,
            "name": "Spotify",
            "details": "Song",
            "state": "Artist",
            "sync_id": "abc",
            "timestamps": { "start": 1 },
        });
        let activity: Activity = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(activity.kind, ActivityType::Listening);
        assert_eq!(activity.sync_id(), Some("abc"));
        assert_eq!(serde_json::to_value(&activity).unwrap(), raw);
    }

    #[test]
    fn test_unknown_type_code_survives() {
        let activity: Activity =
            serde_json::from_value(serde_json::json!({ "type": 42, "name": "x" })).unwrap();
        assert_eq!(activity.kind, ActivityType::Unknown(42));
        assert_eq!(serde_json::to_value(&activity).unwrap()["type"], 42);
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let activity = Activity::new(ActivityType::Playing, "Foo")
            .with_details("")
            .with_state("Lobby");
        assert_eq!(activity.details(), None);
        assert_eq!(activity.state(), Some("Lobby"));
    }
}
