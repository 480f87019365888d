use crate::naming::safe_file_name;
use crate::traits::{StorageError, StorageResult};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Handle to the directory that holds the catalogue.
///
/// Passed explicitly to the store so tests can point it at a temporary directory.
#[derive(Debug, Clone)]
pub struct StorageRoot {
    path: PathBuf,
}

impl StorageRoot {
    /// Create the directory (and its parents) if it does not exist yet.
    pub async fn ensure(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();

        fs::create_dir_all(&path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!(path = %path.display(), "Storage root ready");

        Ok(Self { path })
    }

    /// Wrap a path without touching the filesystem.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of `name` inside the root, using only its final component.
    pub fn resolve(&self, name: &str) -> StorageResult<PathBuf> {
        let safe = safe_file_name(name)?;
        Ok(self.path.join(safe))
    }

    /// Whether the root currently exists as a directory.
    pub async fn is_available(&self) -> bool {
        fs::metadata(&self.path)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}
