use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::{error, warn};
use crate::{Error, ErrorResponse, BAD_REQUEST_ERROR, INTERNAL_ERROR};

/// Handler-boundary error. Carries the underlying message to the caller.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.0.message();

        let error = if status == StatusCode::BAD_REQUEST {
            warn!("Rejected request: {}", self.0);
            BAD_REQUEST_ERROR
        } else {
            error!("Request failed: {}", self.0);
            INTERNAL_ERROR
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
