//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homelink_domain::error::HomeLinkError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HomeLinkError`] to an HTTP response with appropriate status code.
pub struct ApiError(HomeLinkError);

impl From<HomeLinkError> for ApiError {
    fn from(err: HomeLinkError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HomeLinkError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HomeLinkError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HomeLinkError::Registry(err) => {
                tracing::error!(error = %err, "registry call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "failed to register device in upstream service".to_string(),
                )
            }
            HomeLinkError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
