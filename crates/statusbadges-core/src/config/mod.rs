//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files overlaid with `STATUSBADGES__*` environment variables.
//! Each sub-module represents a logical configuration section.

pub mod app;
pub mod badges;
pub mod gateway;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::badges::BadgesConfig;
pub use self::gateway::{GatewayConfig, ReconnectConfig};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration (default.toml + environment overlay + env vars).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Presence gateway connection settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Badge rendering defaults.
    #[serde(default)]
    pub badges: BadgesConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Merges `config/default.toml`, an environment-specific overlay
    /// `config/{env}.toml`, and environment variables prefixed with
    /// `STATUSBADGES` (double underscore separates nested keys).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("STATUSBADGES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject combinations that cannot start a working server.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.gateway.enabled && self.gateway.token.trim().is_empty() {
            return Err(AppError::configuration(
                "gateway.token is required when the gateway is enabled",
            ));
        }
        if self.gateway.event_buffer == 0 {
            return Err(AppError::configuration(
                "gateway.event_buffer must be greater than zero",
            ));
        }
        Ok(())
    }
}
