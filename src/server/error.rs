use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Request-level failures of the HTTP surface.
///
/// Verification outcomes are never errors; they are returned as a
/// `VerificationResult` with status 200. Only requests that cannot be read
/// at all end up here.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Body was not a JSON verification request.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}
