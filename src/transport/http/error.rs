use crate::app::ServiceError;
use crate::transport::http::types::ApiResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failures a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The create body was not valid JSON.
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The create body claimed to be a form but could not be decoded.
    #[error("Invalid form body: {0}")]
    InvalidForm(#[from] serde_urlencoded::de::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Service(e) => {
                tracing::error!(error = %e, "plant store request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::InvalidJson(_) | ApiError::InvalidForm(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (
            status,
            Json(ApiResponse {
                success: false,
                data: None,
                error: Some(self.to_string()),
            }),
        )
            .into_response()
    }
}
