//! Remote selection: builds the configured row provider.

use std::sync::Arc;

use tracing::info;

use filestree_core::config::remote::RemoteConfig;
use filestree_core::error::AppError;
use filestree_core::result::AppResult;
use filestree_core::traits::remote::RowRemote;

/// Build the row remote named by `config.provider`.
pub async fn build_remote(config: &RemoteConfig) -> AppResult<Arc<dyn RowRemote>> {
    let remote: Arc<dyn RowRemote> = match config.provider.as_str() {
        #[cfg(feature = "local")]
        "local" => Arc::new(crate::providers::LocalRowRemote::new(&config.local.path).await?),
        #[cfg(feature = "memory")]
        "memory" => Arc::new(crate::providers::MemoryRowRemote::new()),
        other => {
            return Err(AppError::configuration(format!(
                "Unknown remote provider: '{other}'"
            )));
        }
    };

    info!(provider = remote.provider_type(), "Row remote initialized");
    Ok(remote)
}
