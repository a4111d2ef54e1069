//! Remote row-store configuration.

use serde::{Deserialize, Serialize};

/// Selects and configures the remote row table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Provider name: `"local"` (JSON file) or `"memory"` (process-local).
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Local JSON file provider settings.
    #[serde(default)]
    pub local: LocalRemoteConfig,
}

/// Local JSON file provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalRemoteConfig {
    /// Path of the JSON file holding the row table.
    #[serde(default = "default_local_path")]
    pub path: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            local: LocalRemoteConfig::default(),
        }
    }
}

impl Default for LocalRemoteConfig {
    fn default() -> Self {
        Self {
            path: default_local_path(),
        }
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_local_path() -> String {
    "data/entries.json".to_string()
}
