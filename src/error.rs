use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every variant renders as a JSON [`ErrorResponse`] with a status code that
/// matches the failure.
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be decoded as an item record.
    ///
    /// Keeps the extractor's status: 415 for a missing or wrong content type,
    /// 400 for malformed JSON, 422 for valid JSON that is not an object.
    InvalidItem(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidItem(rejection) => (
                rejection.status(),
                format!("Invalid item: {}", rejection.body_text()),
            ),
        };

        tracing::warn!("Request rejected ({}): {}", status, error_message);

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidItem(rejection)
    }
}
