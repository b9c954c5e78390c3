//! Shared response envelope for API handlers.
//!
//! All notification responses use a `{ "status": ..., "message": ... }`
//! envelope. Use [`StatusResponse`] instead of ad-hoc
//! `serde_json::json!({ ... })` to get compile-time type safety and
//! consistent serialization.

use serde::Serialize;

/// Standard `{ "status": ..., "message": ... }` response envelope.
///
/// `status` is `"success"` or `"error"`; `message` is human-readable.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: String,
}

impl StatusResponse {
    /// Build a success envelope.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }

    /// Build an error envelope.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}
