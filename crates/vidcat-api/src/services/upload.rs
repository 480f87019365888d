//! Media upload service
//!
//! Orchestrates one upload request: reject an empty batch, validate every file, then
//! persist them. A single invalid file rejects the whole batch before anything is written.

use crate::error::HttpAppError;
use crate::state::MediaState;
use vidcat_core::AppError;
use vidcat_processing::MediaValidator;
use vidcat_storage::{MediaCandidate, MediaStore, UploadedFile};

pub struct MediaUploadService<'a> {
    store: &'a dyn MediaStore,
    validator: &'a MediaValidator,
}

impl<'a> MediaUploadService<'a> {
    pub fn new(media: &'a MediaState) -> Self {
        Self {
            store: media.store.as_ref(),
            validator: &media.validator,
        }
    }

    /// Validate then persist the batch, returning the number of files saved.
    ///
    /// A storage failure after some files were written leaves those files in place.
    pub async fn upload(&self, files: Vec<UploadedFile>) -> Result<usize, HttpAppError> {
        if files.is_empty() {
            return Err(AppError::Validation("No files uploaded.".to_string()).into());
        }

        for file in &files {
            if let Err(e) = self.validator.validate(file) {
                tracing::debug!(
                    file_name = %file.file_name(),
                    reason = %e,
                    "Rejecting upload batch"
                );
                return Err(AppError::Validation(format!(
                    "Invalid file type. Only MP4 files are allowed. Offending file: {}",
                    file.file_name()
                ))
                .into());
            }
        }

        let count = files.len();
        self.store.save(files).await?;

        tracing::info!(count, "Upload batch persisted");
        Ok(count)
    }
}
