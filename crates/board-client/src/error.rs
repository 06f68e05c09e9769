//! Client error types.

use thiserror::Error;

use crate::models::HttpValidationError;

/// Errors that can occur when calling the sprintboard API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error, including response-body decode failures.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the request with a 422 validation error.
    #[error("validation failed: {0}")]
    Validation(HttpValidationError),

    /// The service returned a non-success status with no declared body
    /// schema.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body text, if any.
        message: String,
    },
}
