//! Unified error response handling for the HTTP surface
//!
//! Reported domain errors become structured JSON bodies with stable codes;
//! infrastructure failures collapse to a 500 without leaking internals.

use crate::error::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Standard error response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Unique error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Convert to an HTTP response with the given status
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Extension trait for consistent error formatting
pub trait ErrorResponseExt {
    fn to_error_response(&self) -> ErrorResponse;
    fn status_code(&self) -> StatusCode;
}

impl ErrorResponseExt for Error {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            Error::UnknownDogs { .. } => ErrorResponse::new("UNKNOWN_DOGS", self.to_string()),
            Error::WalkNotFound => ErrorResponse::new("WALK_NOT_FOUND", self.to_string()),
            Error::DogNotFound => ErrorResponse::new("DOG_NOT_FOUND", self.to_string()),
            Error::InvalidDogName { .. } => {
                ErrorResponse::new("INVALID_DOG_NAME", self.to_string())
            }
            Error::Database(_) | Error::Migration(_) => {
                ErrorResponse::new("DATABASE_ERROR", "Internal server error")
            }
            _ => ErrorResponse::new("INTERNAL_ERROR", "Internal server error"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::UnknownDogs { .. } | Error::InvalidDogName { .. } => StatusCode::BAD_REQUEST,
            Error::WalkNotFound | Error::DogNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        self.to_error_response().into_response_with_status(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_dogs_map_to_bad_request() {
        let error = Error::unknown_dogs(["Rex"]);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);

        let body = error.to_error_response();
        assert_eq!(body.code, "UNKNOWN_DOGS");
        assert_eq!(body.message, "Unknown dog or dogs: Rex");
    }

    #[test]
    fn a_missing_walk_maps_to_not_found() {
        let error = Error::WalkNotFound;
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);

        let body = error.to_error_response();
        assert_eq!(body.code, "WALK_NOT_FOUND");
        assert_eq!(body.message, "Could not find the referenced walk");
    }

    #[test]
    fn infrastructure_failures_do_not_leak_details() {
        let error = Error::Io(std::io::Error::other("disk on fire"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_error_response().message, "Internal server error");
    }
}
