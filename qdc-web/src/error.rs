//! API error types
//!
//! Client faults (bad payloads, unknown sessions) map to 400, backend
//! faults (model missing, inference failure) to 500. Every error leaves
//! the handler boundary as the uniform `{"success": false, "error": ...}`
//! JSON envelope.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("{0}")]
    BadRequest(String),

    /// Model or label set not loaded (500)
    #[error("{0}")]
    Unavailable(String),

    /// Internal server error (500)
    #[error("{0}")]
    Internal(String),
}

impl From<qdc_core::Error> for ApiError {
    fn from(e: qdc_core::Error) -> Self {
        use qdc_core::Error;
        match e {
            // The client sent something we could not decode
            Error::InvalidImage(msg) => ApiError::BadRequest(format!("invalid image data: {}", msg)),
            Error::ModelUnavailable(msg) => ApiError::Unavailable(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unavailable(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "success": false,
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("invalid request body: {}", rejection.body_text()))
    }
}

/// JSON body extractor whose rejection carries the service error envelope.
///
/// Axum's stock `Json` extractor answers malformed bodies with plain-text
/// 400/422 responses; wrapping it routes those rejections through
/// `ApiError::BadRequest` so clients always see 400 plus
/// `{"success": false, "error": ...}`.
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}
