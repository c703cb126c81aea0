use crate::domain::error::DomainError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("malformatted id")]
    MalformedId,

    #[error("unknown endpoint")]
    UnknownEndpoint,
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Domain(err) => {
                let status = match err {
                    DomainError::Validation { .. } | DomainError::AlreadyExists(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    DomainError::InvalidCredentials
                    | DomainError::Token(_)
                    | DomainError::NotOwner => StatusCode::UNAUTHORIZED,
                    DomainError::NotFound(_) => StatusCode::NOT_FOUND,
                    DomainError::Unexpected(_) => {
                        return (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "internal error".to_string(),
                        );
                    }
                };
                (status, err.to_string())
            }
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, first_validation_message(err)),
            AppError::Body(rejection) => body_rejection(rejection),
            AppError::MalformedId => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::UnknownEndpoint => (StatusCode::NOT_FOUND, self.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();

        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        (status, Json(ErrorBody { error: msg })).into_response()
    }
}

// serde details stay in the log
fn body_rejection(rejection: &JsonRejection) -> (StatusCode, String) {
    match rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => (
            StatusCode::BAD_REQUEST,
            "malformatted request body".to_string(),
        ),
        JsonRejection::MissingJsonContentType(_) => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "expected a JSON request body".to_string(),
        ),
        other => {
            let status = other.status();
            let reason = status.canonical_reason().unwrap_or("bad request");
            (status, reason.to_lowercase())
        }
    }
}

fn first_validation_message(err: &ValidationErrors) -> String {
    err.field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|msg| msg.to_string()))
        .unwrap_or_else(|| err.to_string())
}
