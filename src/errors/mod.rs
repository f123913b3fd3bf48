//! Error handling module for the archiver backend.
//!
//! Only two conditions are errors: a body that does not parse, and a
//! failure talking to MongoDB. Every filtered-out delivery is a successful
//! no-op handled in the API layer, not here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Request body was not a JSON object
    InvalidJson,
    /// Failure communicating with or writing to MongoDB
    Storage(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidJson => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the plain-text response body for this error. The exact strings
    /// are part of the webhook response contract.
    pub fn message(&self) -> String {
        match self {
            AppError::InvalidJson => "Invalid JSON".to_string(),
            AppError::Storage(msg) => format!("MongoDB error: {}", msg),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        tracing::error!("MongoDB error: {:?}", err);
        AppError::Storage(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.message()).into_response()
    }
}
