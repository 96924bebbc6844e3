//! Gateway client: connect, identify or resume, heartbeat, and forward
//! presence dispatches until shutdown.

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tracing::{debug, error, info, warn};

use statusbadges_core::config::GatewayConfig;

use super::backoff::RetryPolicy;
use super::error::GatewayError;
use super::protocol::{self, Dispatch, Hello, Payload, opcode};
use crate::ingest::PresenceEvent;

/// How a single websocket session ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    /// Shutdown was requested.
    Shutdown,
    /// The server asked for a reconnect.
    Reconnect {
        /// Whether the session id is still valid.
        resumable: bool,
    },
}

/// State needed to resume a dropped session.
#[derive(Debug, Clone)]
struct ResumeState {
    session_id: String,
    resume_url: Option<String>,
}

/// Long-running gateway connection that feeds presence events to a channel.
#[derive(Debug)]
pub struct GatewayClient {
    /// Connection settings
    config: GatewayConfig,
    /// Where decoded presence events go
    events: mpsc::Sender<PresenceEvent>,
    /// Reconnect delay policy
    policy: RetryPolicy,
    /// Session to resume, if any
    resume: Option<ResumeState>,
    /// Last dispatch sequence number
    seq: Option<u64>,
    /// Consecutive failed sessions
    failures: u32,
}

impl GatewayClient {
    /// Create a client; nothing connects until [`run`](Self::run)
    pub fn new(config: GatewayConfig, events: mpsc::Sender<PresenceEvent>) -> Self {
        let policy = RetryPolicy::from(&config.reconnect);
        Self {
            config,
            events,
            policy,
            resume: None,
            seq: None,
            failures: 0,
        }
    }

    /// Keep a session alive until shutdown or a fatal error
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> Result<(), GatewayError> {
        info!(url = %self.config.url, intents = self.config.intents, "Gateway client started");

        loop {
            if *shutdown.borrow() {
                break;
            }

            match self.run_session(&mut shutdown).await {
                Ok(SessionEnd::Shutdown) => break,
                Ok(SessionEnd::Reconnect { resumable }) => {
                    if !resumable {
                        self.clear_session();
                        self.failures += 1;
                    }
                    info!(resumable, "Gateway requested reconnect");
                }
                Err(e) if e.is_fatal() => {
                    error!(error = %e, "Gateway stopped after fatal error");
                    return Err(e);
                }
                Err(e) => {
                    if e.invalidates_session() {
                        self.clear_session();
                    }
                    self.failures += 1;
                    warn!(error = %e, failures = self.failures, "Gateway session ended");
                }
            }

            let delay = self.policy.delay(self.failures);
            if !delay.is_zero() {
                info!(delay_ms = delay.as_millis() as u64, "Reconnecting to gateway");
            }
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                _ = time::sleep(delay) => {}
            }
        }

        info!("Gateway client shut down");
        Ok(())
    }

    fn clear_session(&mut self) {
        self.resume = None;
        self.seq = None;
    }

    fn connect_url(&self) -> String {
        match self.resume.as_ref().and_then(|r| r.resume_url.as_deref()) {
            Some(host) => protocol::resume_url(host, &self.config.url),
            None => self.config.url.clone(),
        }
    }

    /// One websocket connection from handshake to close
    async fn run_session(
        &mut self,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<SessionEnd, GatewayError> {
        let url = self.connect_url();
        debug!(url = %url, "Connecting to gateway");
        let (socket, _) = tokio_tungstenite::connect_async(url.as_str()).await?;
        let (mut sink, mut stream) = socket.split();

        let hello = match stream.next().await {
            Some(Ok(Message::Text(text))) => {
                let payload = Payload::parse(text.as_str())?;
                if payload.op != opcode::HELLO {
                    return Err(GatewayError::Protocol(format!(
                        "expected HELLO, got opcode {}",
                        payload.op
                    )));
                }
                serde_json::from_value::<Hello>(payload.d)?.validate()?
            }
            Some(Ok(Message::Close(frame))) => return Err(closed(frame)),
            Some(Ok(other)) => {
                return Err(GatewayError::Protocol(format!(
                    "expected HELLO, got {other:?}"
                )));
            }
            Some(Err(e)) => return Err(e.into()),
            None => return Err(GatewayError::Protocol("closed before HELLO".to_string())),
        };

        let handshake = match &self.resume {
            Some(resume) => {
                info!(session_id = %resume.session_id, "Resuming gateway session");
                protocol::resume(&self.config.token, &resume.session_id, self.seq)
            }
            None => {
                info!("Identifying with gateway");
                protocol::identify(&self.config.token, self.config.intents)
            }
        };
        sink.send(Message::text(handshake)).await?;

        let period = Duration::from_millis(hello.heartbeat_interval);
        let first_beat = period.mul_f64(rand::random::<f64>());
        let mut heartbeat = time::interval_at(Instant::now() + first_beat, period);
        let mut awaiting_ack = false;

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        let _ = sink
                            .send(Message::Close(Some(CloseFrame {
                                code: CloseCode::Normal,
                                reason: "shutting down".into(),
                            })))
                            .await;
                        return Ok(SessionEnd::Shutdown);
                    }
                }
                _ = heartbeat.tick() => {
                    if awaiting_ack {
                        return Err(GatewayError::HeartbeatTimeout);
                    }
                    sink.send(Message::text(protocol::heartbeat(self.seq))).await?;
                    awaiting_ack = true;
                }
                message = stream.next() => {
                    let text = match message {
                        Some(Ok(Message::Text(text))) => text,
                        Some(Ok(Message::Close(frame))) => return Err(closed(frame)),
                        Some(Ok(_)) => continue,
                        Some(Err(e)) => return Err(e.into()),
                        None => return Ok(SessionEnd::Reconnect { resumable: true }),
                    };
                    let payload = Payload::parse(text.as_str())?;
                    if let Some(seq) = payload.s {
                        self.seq = Some(seq);
                    }

                    match payload.op {
                        opcode::DISPATCH => {
                            let event = payload.t.unwrap_or_default();
                            self.handle_dispatch(&event, payload.d).await?;
                        }
                        opcode::HEARTBEAT => {
                            sink.send(Message::text(protocol::heartbeat(self.seq))).await?;
                        }
                        opcode::HEARTBEAT_ACK => awaiting_ack = false,
                        opcode::RECONNECT => return Ok(SessionEnd::Reconnect { resumable: true }),
                        opcode::INVALID_SESSION => {
                            let resumable = payload.d.as_bool().unwrap_or(false);
                            return Ok(SessionEnd::Reconnect { resumable });
                        }
                        other => debug!(op = other, "Ignoring gateway opcode"),
                    }
                }
            }
        }
    }

    async fn handle_dispatch(
        &mut self,
        event: &str,
        data: serde_json::Value,
    ) -> Result<(), GatewayError> {
        let dispatch = match protocol::decode_dispatch(event, data) {
            Ok(dispatch) => dispatch,
            Err(e) => {
                warn!(event, error = %e, "Dropping undecodable dispatch");
                return Ok(());
            }
        };

        match dispatch {
            Dispatch::Ready {
                session_id,
                resume_url,
            } => {
                info!(session_id = %session_id, "Gateway session ready");
                self.resume = Some(ResumeState {
                    session_id,
                    resume_url,
                });
                self.failures = 0;
            }
            Dispatch::Resumed => {
                info!("Gateway session resumed");
                self.failures = 0;
            }
            Dispatch::Presence(event) => {
                self.events
                    .send(event)
                    .await
                    .map_err(|_| GatewayError::EventChannelClosed)?;
            }
            Dispatch::Ignored => {}
        }
        Ok(())
    }
}

fn closed(frame: Option<CloseFrame>) -> GatewayError {
    match frame {
        Some(frame) => GatewayError::Closed {
            code: u16::from(frame.code),
            reason: frame.reason.as_str().to_string(),
        },
        None => GatewayError::Closed {
            code: 1005,
            reason: "no close frame".to_string(),
        },
    }
}
