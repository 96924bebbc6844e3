//! Gateway adapter errors.

use thiserror::Error;
use tokio_tungstenite::tungstenite;

use statusbadges_core::error::AppError;

/// Close codes after which reconnecting cannot succeed.
const FATAL_CLOSE_CODES: [u16; 6] = [4004, 4010, 4011, 4012, 4013, 4014];

/// Close codes that invalidate the session but allow a fresh identify.
const SESSION_RESET_CLOSE_CODES: [u16; 2] = [4007, 4009];

/// Everything that can end a gateway session.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Websocket transport failure.
    #[error("websocket transport error: {0}")]
    Transport(#[from] tungstenite::Error),

    /// A frame was not valid gateway JSON.
    #[error("failed to decode gateway payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server sent something out of protocol order.
    #[error("gateway protocol violation: {0}")]
    Protocol(String),

    /// The server closed the connection.
    #[error("gateway closed the connection with code {code}: {reason}")]
    Closed {
        /// Websocket close code.
        code: u16,
        /// Close reason text.
        reason: String,
    },

    /// No heartbeat ack arrived between two heartbeats.
    #[error("heartbeat was not acknowledged")]
    HeartbeatTimeout,

    /// The ingestor dropped its receiver.
    #[error("presence event channel closed")]
    EventChannelClosed,
}

impl GatewayError {
    /// Whether retrying is pointless.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Closed { code, .. } => FATAL_CLOSE_CODES.contains(code),
            Self::EventChannelClosed => true,
            _ => false,
        }
    }

    /// Whether the current session id must be discarded before reconnecting.
    pub fn invalidates_session(&self) -> bool {
        matches!(self, Self::Closed { code, .. } if SESSION_RESET_CLOSE_CODES.contains(code))
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match &err {
            GatewayError::Closed { code: 4004, .. } => AppError::configuration(err.to_string()),
            _ => AppError::gateway(err.to_string()),
        }
    }
}
