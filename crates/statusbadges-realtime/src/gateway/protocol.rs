//! Gateway JSON frames: opcodes, outgoing payloads, and dispatch decoding.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::warn;

use statusbadges_entity::GatewayPresence;

use super::error::GatewayError;
use crate::ingest::PresenceEvent;

/// Gateway opcodes used by this client.
pub mod opcode {
    /// Server → client event.
    pub const DISPATCH: u8 = 0;
    /// Heartbeat, in either direction.
    pub const HEARTBEAT: u8 = 1;
    /// Start a new session.
    pub const IDENTIFY: u8 = 2;
    /// Continue a dropped session.
    pub const RESUME: u8 = 6;
    /// Server asks the client to reconnect.
    pub const RECONNECT: u8 = 7;
    /// Session rejected; `d` says whether it may be resumed.
    pub const INVALID_SESSION: u8 = 9;
    /// First frame after connecting.
    pub const HELLO: u8 = 10;
    /// Heartbeat acknowledged.
    pub const HEARTBEAT_ACK: u8 = 11;
}

/// Envelope of every gateway frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload {
    /// Opcode.
    pub op: u8,
    /// Opcode-specific data.
    #[serde(default)]
    pub d: Value,
    /// Sequence number, dispatches only.
    #[serde(default)]
    pub s: Option<u64>,
    /// Event name, dispatches only.
    #[serde(default)]
    pub t: Option<String>,
}

impl Payload {
    /// Parse a text frame.
    pub fn parse(text: &str) -> Result<Self, GatewayError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// `d` of a HELLO frame.
#[derive(Debug, Clone, Deserialize)]
pub struct Hello {
    /// Heartbeat period in milliseconds.
    pub heartbeat_interval: u64,
}

impl Hello {
    /// Reject a HELLO whose interval cannot drive a heartbeat timer.
    pub fn validate(self) -> Result<Self, GatewayError> {
        if self.heartbeat_interval == 0 {
            return Err(GatewayError::Protocol(
                "HELLO announced a zero heartbeat interval".to_string(),
            ));
        }
        Ok(self)
    }
}

/// The parts of READY needed to resume later.
#[derive(Debug, Clone, Deserialize)]
pub struct Ready {
    /// Session to resume.
    pub session_id: String,
    /// Host to reconnect to when resuming.
    #[serde(default)]
    pub resume_gateway_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroupCreate {
    id: Option<String>,
    #[serde(default)]
    presences: Vec<Value>,
}

impl GroupCreate {
    /// Decode each presence on its own; a malformed one is skipped, not fatal.
    fn into_snapshot(self) -> PresenceEvent {
        let group_id = self.id;
        let presences = self
            .presences
            .into_iter()
            .filter_map(|raw| match serde_json::from_value::<GatewayPresence>(raw) {
                Ok(presence) => Some(presence.into_parts()),
                Err(e) => {
                    warn!(
                        group_id = group_id.as_deref().unwrap_or("-"),
                        error = %e,
                        "Skipping undecodable presence in group snapshot"
                    );
                    None
                }
            })
            .collect();
        PresenceEvent::GroupSnapshot {
            group_id,
            presences,
        }
    }
}

/// A dispatch the client acts on.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// Session established.
    Ready {
        /// Session id.
        session_id: String,
        /// Resume host, if given.
        resume_url: Option<String>,
    },
    /// A resume succeeded.
    Resumed,
    /// Presence data for the store.
    Presence(PresenceEvent),
    /// Any other event name.
    Ignored,
}

/// Decode the `d` of a dispatch frame named `event`.
pub fn decode_dispatch(event: &str, data: Value) -> Result<Dispatch, GatewayError> {
    Ok(match event {
        "READY" => {
            let ready: Ready = serde_json::from_value(data)?;
            Dispatch::Ready {
                session_id: ready.session_id,
                resume_url: ready.resume_gateway_url,
            }
        }
        "RESUMED" => Dispatch::Resumed,
        "GUILD_CREATE" => {
            let group: GroupCreate = serde_json::from_value(data)?;
            Dispatch::Presence(group.into_snapshot())
        }
        "PRESENCE_UPDATE" => {
            let presence: GatewayPresence = serde_json::from_value(data)?;
            let (user_id, record) = presence.into_parts();
            Dispatch::Presence(PresenceEvent::PresenceUpdate { user_id, record })
        }
        _ => Dispatch::Ignored,
    })
}

/// HEARTBEAT frame carrying the last seen sequence number.
pub fn heartbeat(seq: Option<u64>) -> String {
    json!({ "op": opcode::HEARTBEAT, "d": seq }).to_string()
}

/// IDENTIFY frame.
pub fn identify(token: &str, intents: u64) -> String {
    json!({
        "op": opcode::IDENTIFY,
        "d": {
            "token": token,
            "intents": intents,
            "properties": {
                "os": std::env::consts::OS,
                "browser": "statusbadges",
                "device": "statusbadges",
            },
        },
    })
    .to_string()
}

/// RESUME frame.
pub fn resume(token: &str, session_id: &str, seq: Option<u64>) -> String {
    json!({
        "op": opcode::RESUME,
        "d": { "token": token, "session_id": session_id, "seq": seq },
    })
    .to_string()
}

/// Point a resume host at the same version/encoding as the configured URL.
pub fn resume_url(resume_host: &str, configured_url: &str) -> String {
    let base = resume_host.trim_end_matches('/');
    match configured_url.split_once('?') {
        Some((_, query)) => format!("{base}/?{query}"),
        None => base.to_string(),
    }
}
