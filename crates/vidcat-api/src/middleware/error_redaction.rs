use crate::error::ProductionErrorBody;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

/// In production, replace an error body with its sanitized counterpart so raw OS
/// error text never reaches clients. `is_production` comes from [`vidcat_core::Config`].
pub async fn redact_error_details(
    State(is_production): State<bool>,
    mut response: Response,
) -> Response {
    let Some(ProductionErrorBody(body)) = response.extensions_mut().remove::<ProductionErrorBody>()
    else {
        return response;
    };

    if !is_production {
        return response;
    }

    (response.status(), Json(body)).into_response()
}
