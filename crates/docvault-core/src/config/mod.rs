//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field has a default so an absent file still yields
//! a usable configuration.

pub mod gateway;
pub mod logging;
pub mod search;
pub mod viewer;

use serde::{Deserialize, Serialize};

use self::gateway::GatewayConfig;
use self::logging::LoggingConfig;
use self::search::SearchConfig;
use self::viewer::ViewerConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides, e.g. `DOCVAULT__GATEWAY__BASE_URL`.
pub const ENV_PREFIX: &str = "DOCVAULT";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend connection settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Document viewer settings.
    #[serde(default)]
    pub viewer: ViewerConfig,
    /// Search rendering settings.
    #[serde(default)]
    pub search: SearchConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the file at `path`, an optional `config/{env}` overlay, and
    /// environment variables prefixed with `DOCVAULT__`. Missing files are
    /// not an error.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        parsed.validate()?;
        Ok(parsed)
    }

    /// Sanity-check values that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.gateway.base_url.trim().is_empty() {
            return Err(AppError::configuration("gateway.base_url must not be empty"));
        }
        if self.gateway.timeout_seconds == 0 {
            return Err(AppError::configuration(
                "gateway.timeout_seconds must be greater than zero",
            ));
        }
        if self.search.snippet_length == 0 {
            return Err(AppError::configuration(
                "search.snippet_length must be greater than zero",
            ));
        }
        Ok(())
    }
}
