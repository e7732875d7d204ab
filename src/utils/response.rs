use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};

/// Envelope for the status endpoints. `/api/recipes` answers with a bare array
/// and never uses it.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Both arms render the envelope, only the status and `success` flag differ.
pub type EnvelopeResult<T = serde_json::Value> =
    Result<(StatusCode, Json<ApiResponse<T>>), (StatusCode, Json<ApiResponse<T>>)>;

impl<T> ApiResponse<T> {
    pub fn ok(message: &str, data: T) -> Self {
        Self::new(true, message, data)
    }

    pub fn failed(message: &str, data: T) -> Self {
        Self::new(false, message, data)
    }

    fn new(success: bool, message: &str, data: T) -> Self {
        Self {
            success,
            message: message.to_string(),
            data: Some(data),
        }
    }
}
