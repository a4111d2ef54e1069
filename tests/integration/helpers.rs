//! Shared test helpers for integration tests.

use std::sync::Arc;

use tempfile::TempDir;

use filestree_core::config::AppConfig;
use filestree_core::config::remote::{LocalRemoteConfig, RemoteConfig};
use filestree_core::traits::RowRemote;
use filestree_core::types::AuthState;
use filestree_service::{EntryStore, SyncController};
use filestree_storage::providers::MemoryRowRemote;

/// Test application context
pub struct TestApp {
    /// Controller under test
    pub sync: SyncController,
    /// The remote it talks to
    pub remote: Arc<MemoryRowRemote>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// A controller over an empty in-memory table
    pub fn new() -> Self {
        Self::with_remote(MemoryRowRemote::new())
    }

    /// A controller over the given in-memory table
    pub fn with_remote(remote: MemoryRowRemote) -> Self {
        let config = AppConfig::default();
        let remote = Arc::new(remote);
        let sync = SyncController::spawn(
            EntryStore::new(&config.store),
            remote.clone(),
            &config.sync,
        );
        Self {
            sync,
            remote,
            config,
        }
    }

    /// Sign in and return once the catch-up push is done
    pub async fn sign_in(&self) {
        self.sync
            .set_auth_state(AuthState::Authorized)
            .await
            .expect("sign in");
    }
}

/// A local JSON-file remote in a fresh temp directory
pub struct LocalApp {
    /// Keeps the directory alive for the test's duration
    pub dir: TempDir,
    /// Config pointing at the table file
    pub config: AppConfig,
}

impl LocalApp {
    /// Create a temp directory and a config for a table file inside it
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut config = AppConfig::default();
        config.remote = RemoteConfig {
            provider: "local".to_string(),
            local: LocalRemoteConfig {
                path: dir.path().join("entries.json").to_string_lossy().into_owned(),
            },
        };
        Self { dir, config }
    }

    /// Build the remote and a controller over it, like a fresh session
    pub async fn session(&self) -> (SyncController, Arc<dyn RowRemote>) {
        let remote = filestree_storage::build_remote(&self.config.remote)
            .await
            .expect("build remote");
        let sync = SyncController::spawn(
            EntryStore::new(&self.config.store),
            remote.clone(),
            &self.config.sync,
        );
        (sync, remote)
    }
}
