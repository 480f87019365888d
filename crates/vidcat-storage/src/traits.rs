//! Media store abstraction
//!
//! This module defines the `MediaStore` trait the API talks to, the upload payload type
//! and the storage error taxonomy.

use async_trait::async_trait;
use std::fmt;
use std::io;
use std::path::Path;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;
use vidcat_core::MediaFileRecord;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write {file_name}: {source}")]
    WriteFailed {
        file_name: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to list storage root: {0}")]
    ListFailed(#[source] io::Error),

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl StorageError {
    /// Short description safe to hand to clients: names the file and the failure kind,
    /// never the raw OS message.
    pub fn diagnostic(&self) -> String {
        match self {
            StorageError::WriteFailed { file_name, source } => {
                format!("failed to write '{}' ({:?})", file_name, source.kind())
            }
            StorageError::ListFailed(source) => {
                format!("failed to list storage root ({:?})", source.kind())
            }
            StorageError::InvalidName(name) => format!("invalid file name '{}'", name),
            StorageError::ConfigError(_) => "storage is misconfigured".to_string(),
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Anything that can be judged as a media upload before it is persisted.
pub trait MediaCandidate {
    /// Client-declared name, possibly with directory components.
    fn file_name(&self) -> &str;

    /// Byte length of the payload.
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One uploaded file waiting to be persisted.
pub struct UploadedFile {
    file_name: String,
    len: u64,
    reader: Pin<Box<dyn AsyncRead + Send>>,
}

impl UploadedFile {
    pub fn new(
        file_name: impl Into<String>,
        len: u64,
        reader: impl AsyncRead + Send + 'static,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            len,
            reader: Box::pin(reader),
        }
    }

    /// In-memory upload, mostly useful in tests.
    pub fn from_bytes(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        let len = data.len() as u64;
        Self::new(file_name, len, io::Cursor::new(data))
    }

    pub(crate) fn reader_mut(&mut self) -> &mut Pin<Box<dyn AsyncRead + Send>> {
        &mut self.reader
    }
}

impl MediaCandidate for UploadedFile {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn len(&self) -> u64 {
        self.len
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("file_name", &self.file_name)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// Media store abstraction
///
/// The catalogue is a flat set of uniquely-named files. Saving a name that already
/// exists overwrites it; nothing is ever deleted through this trait.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Scan the storage root and return one record per recognized media file, sorted
    /// by file name (byte-wise ascending). A missing or empty root yields an empty list.
    async fn list(&self) -> StorageResult<Vec<MediaFileRecord>>;

    /// Persist the uploads in order under their safe names.
    ///
    /// Stops at the first failing write and reports it. Files written before the
    /// failure stay on disk.
    async fn save(&self, uploads: Vec<UploadedFile>) -> StorageResult<()>;

    /// Browser-consumable path for a stored file, e.g. `/media/my%20clip.mp4`.
    fn resolve_url(&self, file_name: &str) -> String;

    /// Directory holding the catalogue.
    fn root(&self) -> &Path;

    /// Whether the storage root currently exists and can hold files.
    async fn is_available(&self) -> bool;
}
