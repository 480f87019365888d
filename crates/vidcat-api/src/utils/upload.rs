//! Common utilities for file upload handlers

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use std::io::SeekFrom;
use tokio::io::{AsyncSeekExt, AsyncWriteExt};
use vidcat_core::constants::UPLOAD_FIELD_NAME;
use vidcat_core::models::format_file_size;
use vidcat_core::AppError;
use vidcat_storage::UploadedFile;

const MIB: usize = 1024 * 1024;

/// Client-facing message for a request body over the upload ceiling.
pub fn payload_too_large_message(max_bytes: usize) -> String {
    let limit = if max_bytes >= MIB && max_bytes % MIB == 0 {
        format!("{} MB", max_bytes / MIB)
    } else {
        format_file_size(max_bytes as u64)
    };
    format!("Upload failed: total upload size exceeds {}.", limit)
}

/// Map a multipart read failure. A body cut off by the size limit surfaces here while
/// streaming, so it keeps its 413 status.
pub fn multipart_error(err: MultipartError, max_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(payload_too_large_message(max_bytes))
    } else {
        AppError::Validation(format!("Failed to read multipart: {}", err.body_text()))
    }
}

/// Extract every file part of the `files` field from a multipart form.
///
/// Each part is spooled to an anonymous temporary file so large batches never sit in
/// memory; the returned uploads read back from those spools. Parts under other field
/// names, and parts without a file name (an empty file input), are skipped.
pub async fn extract_multipart_files(
    mut multipart: Multipart,
    max_bytes: usize,
) -> Result<Vec<UploadedFile>, AppError> {
    let mut files = Vec::new();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }

        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };

        let spool = tempfile::tempfile()
            .map_err(|e| AppError::Internal(format!("Failed to create spool file: {}", e)))?;
        let mut spool = tokio::fs::File::from_std(spool);

        let mut len: u64 = 0;
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?
        {
            len += chunk.len() as u64;
            spool.write_all(&chunk).await?;
        }
        spool.flush().await?;
        spool.seek(SeekFrom::Start(0)).await?;

        tracing::debug!(file_name = %file_name, size_bytes = len, "Spooled upload part");
        files.push(UploadedFile::new(file_name, len, spool));
    }

    Ok(files)
}
