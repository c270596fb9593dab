use axum::{http::StatusCode, Json};
use serde_json::json;
use thiserror::Error;

/// Reasons an incoming work entry is refused, in the order they are checked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("No input data provided")]
    MissingBody,
    #[error("Project number is required")]
    MissingProjectNumber,
    #[error("Worker name is required")]
    MissingWorkerName,
    #[error("Work time (hours) is required")]
    MissingWorkTime,
    #[error("Work time must be a valid number")]
    InvalidWorkTime,
    #[error("Work time must be a positive number")]
    NonPositiveWorkTime,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }

    /// Storage failures are reported to clients without the underlying cause.
    pub fn storage(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<EntryError> for AppError {
    fn from(err: EntryError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
