//! Typed error handling for the service
//!
//! Every failure a handler can report is an [`ApiError`]. Validators return
//! one, handlers propagate it with `?`, and axum turns it into a JSON response
//! through [`IntoResponse`].
//!
//! # Error Categories
//!
//! - [`ApiError::Validation`]: a payload field is missing, malformed or out of range
//! - [`ApiError::NotFound`]: the route id matches no stored entity
//! - [`ApiError::BusinessRule`]: the operation is forbidden by the entity's current state
//! - [`ApiError::Request`]: the request itself is unusable (see [`RequestError`])
//! - [`ApiError::Internal`]: anything unexpected (poisoned lock, id exhaustion)
//!
//! # Example
//!
//! ```rust,ignore
//! match result {
//!     Err(ApiError::NotFound { entity, id }) => println!("{entity} {id} is gone"),
//!     Err(e) => eprintln!("{} ({})", e, e.status_code()),
//!     Ok(_) => {}
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for request handling
#[derive(Debug, Error)]
pub enum ApiError {
    /// A payload field failed validation
    #[error("{message}")]
    Validation {
        field: String,
        message: String,
    },

    /// The route id has no matching stored entity
    #[error("{entity} {id} not found")]
    NotFound {
        /// Display label of the entity type ("Dish", "Order")
        entity: &'static str,
        id: String,
    },

    /// The entity's current state forbids the operation
    #[error("{message}")]
    BusinessRule { message: String },

    /// HTTP/Request errors
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors related to the shape of the HTTP request rather than its fields
#[derive(Debug, Error)]
pub enum RequestError {
    /// Body could not be parsed as JSON
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// Body parsed but has no `data` object
    #[error("Request body must include a 'data' property")]
    MissingData,

    /// No route matches the path
    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    /// The path exists but not for this method
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: &'static str,
}

impl ApiError {
    /// Shorthand for a field validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a business rule violation
    pub fn business_rule(message: impl Into<String>) -> Self {
        ApiError::BusinessRule {
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BusinessRule { .. } => StatusCode::BAD_REQUEST,
            ApiError::Request(e) => e.status_code(),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::NotFound { .. } => "ENTITY_NOT_FOUND",
            ApiError::BusinessRule { .. } => "BUSINESS_RULE_VIOLATION",
            ApiError::Request(e) => e.error_code(),
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        }
    }
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::MissingData => StatusCode::BAD_REQUEST,
            RequestError::PathNotFound { .. } => StatusCode::NOT_FOUND,
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::MissingData => "MISSING_DATA",
            RequestError::PathNotFound { .. } => "PATH_NOT_FOUND",
            RequestError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, code = self.error_code(), "request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Request(RequestError::InvalidBody {
            message: err.to_string(),
        })
    }
}

/// A specialized Result type for request handling
pub type ApiResult<T> = Result<T, ApiError>;
