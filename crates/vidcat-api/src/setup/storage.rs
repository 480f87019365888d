//! Storage setup and initialization

use anyhow::Result;
use std::sync::Arc;
use vidcat_core::Config;
use vidcat_storage::{LocalMediaStore, MediaStore, StorageRoot};

/// Create the storage root under the web root and open the media store over it.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn MediaStore>> {
    tracing::info!("Initializing media storage...");
    let root = StorageRoot::ensure(config.storage_root()).await?;
    let store: Arc<dyn MediaStore> = Arc::new(LocalMediaStore::new(root));
    tracing::info!(
        path = %store.root().display(),
        "Media storage initialized successfully"
    );
    Ok(store)
}
