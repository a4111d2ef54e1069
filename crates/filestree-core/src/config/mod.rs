//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and `FILESTREE__` environment variables. Each
//! sub-module represents a logical configuration section.

pub mod logging;
pub mod remote;
pub mod store;
pub mod sync;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::remote::RemoteConfig;
use self::store::StoreConfig;
use self::sync::SyncConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Every section carries serde defaults, so an empty source set still
/// deserializes into a usable configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Entry store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Remote row-store settings.
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Sync controller settings.
    #[serde(default)]
    pub sync: SyncConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files in `dir`.
    ///
    /// Merges `{dir}/default` with an environment-specific overlay
    /// (`{dir}/{env}`) and environment variables prefixed with
    /// `FILESTREE__`. Both files are optional.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("FILESTREE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
