//! Entry store configuration.

use serde::{Deserialize, Serialize};

/// Entry store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Label new entries start from before being made unique among siblings.
    #[serde(default = "default_name")]
    pub default_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_name: default_name(),
        }
    }
}

fn default_name() -> String {
    "Untitled".to_string()
}
