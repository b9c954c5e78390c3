use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response::StatusResponse;

/// Error taxonomy for the notification endpoint.
///
/// Every failure is recovered locally and converted into the uniform
/// `{ "status": "error", "message": ... }` envelope; callers always see
/// HTTP 200 and read the logical outcome from the `status` field.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum NotifyError {
    /// No request body supplied. No parse attempted, no delivery call made.
    #[error("Request body is empty")]
    EmptyBody,

    /// Body present but not valid JSON for the expected shape. The decode
    /// detail is logged server-side only; callers get this generic message.
    #[error("Invalid JSON format")]
    MalformedJson,

    /// A field required for the chosen route was empty or absent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The push provider rejected or failed the delivery call. Carries the
    /// provider's error text verbatim.
    #[error("{0}")]
    Delivery(String),
}

/// Convenience type alias for handler return values.
pub type NotifyResult<T> = Result<T, NotifyError>;

impl IntoResponse for NotifyError {
    fn into_response(self) -> Response {
        let envelope = StatusResponse::error(self.to_string());
        (StatusCode::OK, axum::Json(envelope)).into_response()
    }
}
