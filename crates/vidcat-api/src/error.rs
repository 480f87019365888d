//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`. Use
//! `AppError` (or types that convert into `HttpAppError`) for errors so they render
//! consistently (status, body, logging).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vidcat_core::{AppError, ErrorMetadata, LogLevel};
use vidcat_storage::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong
    pub message: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    /// Operator-facing detail, present for server-side failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from vidcat-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Error occurred");
        }
    }
}

/// Detail shown to clients: the sanitized detail in production, the full error text
/// appended outside of it.
fn response_detail(app_error: &AppError, is_production: bool) -> Option<String> {
    let detail = app_error.client_detail();
    if is_production || !app_error.is_sensitive() {
        return detail;
    }

    match detail {
        Some(detail) => Some(format!("{} | {}", detail, app_error)),
        None => Some(app_error.to_string()),
    }
}

/// Sanitized body attached to every error response. The error redaction middleware
/// swaps it in when the application runs in production.
#[derive(Debug, Clone)]
pub struct ProductionErrorBody(pub ErrorResponse);

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = |is_production| ErrorResponse {
            message: app_error.client_message(),
            code: app_error.error_code().to_string(),
            detail: response_detail(app_error, is_production),
        };

        let mut response = (status, Json(body(false))).into_response();
        response
            .extensions_mut()
            .insert(ProductionErrorBody(body(true)));
        response
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::InvalidName(name) => {
                AppError::Validation(format!("Invalid file name: {}", name))
            }
            StorageError::ConfigError(msg) => AppError::Internal(msg),
            err @ (StorageError::WriteFailed { .. } | StorageError::ListFailed(_)) => {
                AppError::Storage {
                    detail: err.diagnostic(),
                    message: err.to_string(),
                }
            }
        };
        HttpAppError(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn write_failed() -> StorageError {
        StorageError::WriteFailed {
            file_name: "clip.mp4".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied (os error 13)"),
        }
    }

    #[test]
    fn test_from_storage_write_failure() {
        let HttpAppError(app_err) = write_failed().into();
        match app_err {
            AppError::Storage { message, detail } => {
                assert!(message.contains("os error 13"));
                assert_eq!(detail, "failed to write 'clip.mp4' (PermissionDenied)");
            }
            other => panic!("Expected Storage variant, got {:?}", other),
        }
    }

    #[test]
    fn test_from_storage_invalid_name() {
        let HttpAppError(app_err) = StorageError::InvalidName("..".to_string()).into();
        assert!(matches!(app_err, AppError::Validation(msg) if msg.contains("..")));
    }

    #[test]
    fn test_production_detail_is_sanitized() {
        let HttpAppError(app_err) = write_failed().into();

        let production = response_detail(&app_err, true).unwrap();
        assert!(!production.contains("os error"));
        assert!(production.contains("clip.mp4"));

        let development = response_detail(&app_err, false).unwrap();
        assert!(development.contains("os error 13"));
    }

    #[test]
    fn test_response_carries_production_body() {
        let response = HttpAppError::from(write_failed()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let ProductionErrorBody(body) = response
            .extensions()
            .get::<ProductionErrorBody>()
            .cloned()
            .unwrap();
        assert_eq!(body.code, "STORAGE_ERROR");
        assert_eq!(
            body.detail.as_deref(),
            Some("failed to write 'clip.mp4' (PermissionDenied)")
        );
    }

    #[test]
    fn test_validation_has_no_detail() {
        let app_err = AppError::Validation("No files uploaded.".to_string());
        assert_eq!(response_detail(&app_err, false), None);
        assert_eq!(response_detail(&app_err, true), None);
    }

    /// Verifies the public error response contract: serialized ErrorResponse has
    /// "message", "code", and optionally "detail".
    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse {
            message: "No files uploaded.".to_string(),
            code: "VALIDATION_ERROR".to_string(),
            detail: None,
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(
            json.get("message").and_then(|v| v.as_str()),
            Some("No files uploaded.")
        );
        assert_eq!(
            json.get("code").and_then(|v| v.as_str()),
            Some("VALIDATION_ERROR")
        );
        assert!(json.get("detail").is_none());
    }
}
