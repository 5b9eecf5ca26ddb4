use poem::{IntoResponse, Response, error::ResponseError, http::StatusCode, web::Json};
use thiserror::Error;

use crate::{domain::errors::DomainError, presentation::http::responses::ErrorBody};

pub const INVALID_USER_ID: &str = "Invalid user ID";
pub const USER_NOT_FOUND: &str = "User not found";

/// Client-visible failure. The message is sent as-is in the error body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn as_response(&self) -> Response {
        error_response(self.status(), self.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(message) => ApiError::BadRequest(message),
            DomainError::InvalidIdentifier(_) => ApiError::BadRequest(INVALID_USER_ID.to_string()),
            DomainError::NotFound(_) => ApiError::NotFound(USER_NOT_FOUND.to_string()),
            DomainError::Other(err) => {
                tracing::error!(error = ?err, "request failed");
                ApiError::Internal(format!("{err:#}"))
            }
        }
    }
}

/// Renders any error leaving the application, including payload parse
/// failures and unknown routes, as `{"error": message}`.
pub async fn render_error(err: poem::Error) -> Response {
    error_response(err.status(), err.to_string())
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}
