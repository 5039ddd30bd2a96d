//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field has a default so the server starts without any file.

pub mod app;
pub mod converter;
pub mod logging;
pub mod upstream;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::converter::ConverterConfig;
pub use self::logging::LoggingConfig;
pub use self::upstream::UpstreamConfig;

use crate::error::AppError;

/// Prefix of environment variables overriding file configuration.
pub const ENV_PREFIX: &str = "LCSC_EXPORTER";

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration files
/// (`config/default.toml` + environment overlay + `LCSC_EXPORTER__*` vars).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    #[validate(nested)]
    pub server: ServerConfig,
    /// Upstream component lookup settings.
    #[validate(nested)]
    pub upstream: UpstreamConfig,
    /// External converter settings.
    #[validate(nested)]
    pub converter: ConverterConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default`, the `config/{env}` overlay and environment
    /// variables prefixed with `LCSC_EXPORTER` (`__` separates sections),
    /// then validates the result.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("converter.args")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// `host:port` the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
