//! Top-level realtime engine that owns the store and its writers.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::info;

use statusbadges_core::config::GatewayConfig;
use statusbadges_core::result::AppResult;

use crate::gateway::GatewayClient;
use crate::ingest::EventIngestor;
use crate::presence::PresenceStore;

/// Owns the presence store and the ingestor that writes to it.
///
/// Cloning is cheap; every clone shares the same store.
#[derive(Debug, Clone)]
pub struct RealtimeEngine {
    /// Shared presence cache.
    pub store: Arc<PresenceStore>,
    /// Writer for the cache.
    pub ingestor: Arc<EventIngestor>,
}

/// Background tasks spawned by [`RealtimeEngine::start`].
#[derive(Debug)]
pub struct RealtimeTasks {
    /// Channel → store task.
    pub ingestor: JoinHandle<()>,
    /// Websocket task; absent when the gateway is disabled.
    pub gateway: Option<JoinHandle<AppResult<()>>>,
}

impl RealtimeEngine {
    /// Create an engine around an empty store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(PresenceStore::new()))
    }

    /// Create an engine around an existing store.
    pub fn with_store(store: Arc<PresenceStore>) -> Self {
        let ingestor = Arc::new(EventIngestor::new(Arc::clone(&store)));
        Self { store, ingestor }
    }

    /// Spawn the ingestor and, if enabled, the gateway client.
    ///
    /// Both stop when `shutdown` flips to `true`.
    pub fn start(&self, config: &GatewayConfig, shutdown: watch::Receiver<bool>) -> RealtimeTasks {
        let (tx, rx) = mpsc::channel(config.event_buffer);

        let ingestor = Arc::clone(&self.ingestor);
        let ingestor_shutdown = shutdown.clone();
        let ingestor = tokio::spawn(async move {
            ingestor.run(rx, ingestor_shutdown).await;
        });

        let gateway = if config.enabled {
            let client = GatewayClient::new(config.clone(), tx);
            Some(tokio::spawn(async move {
                client.run(shutdown).await.map_err(Into::into)
            }))
        } else {
            info!("Gateway disabled; presence store will stay empty");
            drop(tx);
            None
        };

        RealtimeTasks { ingestor, gateway }
    }
}

impl Default for RealtimeEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_gateway_stops_ingestor_when_channel_closes() {
        let engine = RealtimeEngine::new();
        let config = GatewayConfig {
            enabled: false,
            ..GatewayConfig::default()
        };
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        let tasks = engine.start(&config, shutdown_rx);
        assert!(tasks.gateway.is_none());
        tasks.ingestor.await.unwrap();
        assert!(engine.store.is_empty());
    }
}
