use crate::model::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hashgate_core::CoreError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors surfaced to HTTP clients.
///
/// The `Display` text of each variant is exactly the `error` message sent in
/// the response body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("input is required")]
    InputRequired,
    #[error("input must be alphanumeric (a-z, A-Z, 0-9)")]
    InputNotAlphanumeric,
    #[error("invalid JSON body")]
    InvalidJson,
    #[error("method not allowed, use {0}")]
    MethodNotAllowed(&'static str),
    #[error("not found")]
    NotFound,
    #[error("hash generation failed")]
    Generation(
        #[from]
        #[source]
        CoreError,
    ),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InputRequired | AppError::InputNotAlphanumeric | AppError::InvalidJson => {
                StatusCode::BAD_REQUEST
            }
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Generation(source) = &self {
            error!(error = %source, "hash generation failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
