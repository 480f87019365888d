use crate::root::StorageRoot;
use crate::traits::{MediaCandidate, MediaStore, StorageError, StorageResult, UploadedFile};
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::io;
use std::path::Path;
use std::time::Instant;
use tokio::fs;
use vidcat_core::constants::{MEDIA_EXTENSION, MEDIA_URL_PREFIX};
use vidcat_core::MediaFileRecord;

/// Everything except the RFC 3986 unreserved characters gets escaped.
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Local filesystem media store
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    root: StorageRoot,
    extension: String,
    url_prefix: String,
}

impl LocalMediaStore {
    /// Store over `root` recognizing `.mp4` files and serving them under `/media`.
    pub fn new(root: StorageRoot) -> Self {
        Self::with_extension(root, MEDIA_EXTENSION)
    }

    pub fn with_extension(root: StorageRoot, extension: impl Into<String>) -> Self {
        Self {
            root,
            extension: extension.into().trim_start_matches('.').to_lowercase(),
            url_prefix: MEDIA_URL_PREFIX.to_string(),
        }
    }

    fn has_media_extension(&self, name: &str) -> bool {
        name.rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(&self.extension))
    }
}

fn write_failed(file_name: &str, source: io::Error) -> StorageError {
    StorageError::WriteFailed {
        file_name: file_name.to_string(),
        source,
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn list(&self) -> StorageResult<Vec<MediaFileRecord>> {
        let start = Instant::now();

        let mut entries = match fs::read_dir(self.root.path()).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.root.path().display(), "Storage root absent, empty catalogue");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::ListFailed(e)),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(StorageError::ListFailed)? {
            // Non UTF-8 names cannot be expressed in the JSON listing.
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            if !self.has_media_extension(&name) {
                continue;
            }

            let metadata = match fs::metadata(entry.path()).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::debug!(file_name = %name, error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }

            records.push(MediaFileRecord::new(name, metadata.len()));
        }

        records.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        tracing::debug!(
            path = %self.root.path().display(),
            count = records.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Listed storage root"
        );

        Ok(records)
    }

    async fn save(&self, uploads: Vec<UploadedFile>) -> StorageResult<()> {
        for mut upload in uploads {
            let path = self.root.resolve(upload.file_name())?;
            let safe_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default()
                .to_string();
            let start = Instant::now();

            let mut file = fs::File::create(&path)
                .await
                .map_err(|e| write_failed(&safe_name, e))?;

            let bytes_copied = tokio::io::copy(upload.reader_mut(), &mut file)
                .await
                .map_err(|e| write_failed(&safe_name, e))?;

            file.sync_all()
                .await
                .map_err(|e| write_failed(&safe_name, e))?;

            tracing::info!(
                path = %path.display(),
                file_name = %safe_name,
                size_bytes = bytes_copied,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Local storage write successful"
            );
        }

        Ok(())
    }

    fn resolve_url(&self, file_name: &str) -> String {
        format!(
            "{}/{}",
            self.url_prefix.trim_end_matches('/'),
            utf8_percent_encode(file_name, URL_COMPONENT)
        )
    }

    fn root(&self) -> &Path {
        self.root.path()
    }

    async fn is_available(&self) -> bool {
        self.root.is_available().await
    }
}
