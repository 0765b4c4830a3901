//! Mapping of core errors onto HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use geodist_core::GeodistError;

use super::messages::ErrorBody;

/// Error returned by REST handlers
#[derive(Debug)]
pub struct ApiError(pub GeodistError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Body sent to the caller. Internal faults carry a generic message only.
    pub fn body(&self) -> ErrorBody {
        let message = if self.0.is_client_error() {
            self.0.to_string()
        } else {
            "Internal server error".to_string()
        };
        ErrorBody {
            code: self.0.error_code().to_string(),
            message,
        }
    }
}

impl From<GeodistError> for ApiError {
    fn from(err: GeodistError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
