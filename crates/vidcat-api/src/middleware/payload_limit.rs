use crate::error::HttpAppError;
use crate::utils::upload::payload_too_large_message;
use axum::{
    body::{Bytes, HttpBody},
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    BoxError,
};
use vidcat_core::AppError;

/// Give the body-limit layer's early 413 (known `Content-Length`) the same JSON body a
/// limit tripped while streaming gets.
pub async fn payload_too_large_as_json<B>(
    State(max_upload_bytes): State<usize>,
    response: Response<B>,
) -> Response
where
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"));

    if response.status() != StatusCode::PAYLOAD_TOO_LARGE || is_json {
        return response.into_response();
    }

    HttpAppError(AppError::PayloadTooLarge(payload_too_large_message(
        max_upload_bytes,
    )))
    .into_response()
}
