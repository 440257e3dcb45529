//! Error Types for the Leaseify API
//!
//! This module defines error handling for the API layer, including:
//! - ApiError struct for structured error responses
//! - ErrorCode enum for categorizing errors
//! - IntoResponse implementation for Axum HTTP responses
//!
//! All errors are serialized as JSON with appropriate HTTP status codes.
//! The body always carries a `stack` field; in production mode it is
//! replaced by a fixed placeholder so internals never leak.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use leaseify_core::{StoreError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{runtime_mode, RuntimeMode};

/// Placeholder emitted in the `stack` field when running in production.
pub const STACK_PLACEHOLDER: &str = "<redacted>";

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses.
///
/// Each error code maps to a specific HTTP status code and represents
/// a category of error that can occur during API operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request validation failed (presence or shape)
    ValidationFailed,

    /// Request contains invalid input data
    InvalidInput,

    /// Required field is missing from request
    MissingField,

    /// Requested entity does not exist
    NotFound,

    /// Requested route does not exist
    RouteNotFound,

    /// Operation conflicts with current state
    StateConflict,

    /// Internal server error
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::ValidationFailed | ErrorCode::InvalidInput | ErrorCode::MissingField => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::NotFound | ErrorCode::RouteNotFound => StatusCode::NOT_FOUND,
            ErrorCode::StateConflict => StatusCode::CONFLICT,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ============================================================================
// FIELD ERRORS
// ============================================================================

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// API ERROR STRUCT
// ============================================================================

/// Structured error response for API operations.
///
/// This type is returned by all API endpoints when an error occurs,
/// and is the exact wire shape clients deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiError {
    /// Error code categorizing the error
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Debug rendering of the error in development; placeholder in production.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,

    /// Field-level validation failures, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Create a new API error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            stack: None,
            errors: None,
        }
    }

    /// Attach field-level validation detail.
    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }

    /// Create a ValidationFailed error.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a MissingField error.
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingField,
            format!("Required field '{}' is missing", field),
        )
        .with_errors(vec![FieldError::new(field, "is required")])
    }

    /// Create a NotFound error for an entity.
    pub fn entity_not_found(entity_type: &str, id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::NotFound,
            format!("{} with id {} not found", entity_type, id),
        )
    }

    /// Create a RouteNotFound error carrying the requested path.
    pub fn route_not_found(path: &str) -> Self {
        Self::new(ErrorCode::RouteNotFound, format!("Not Found - {}", path))
    }

    /// Create a StateConflict error.
    pub fn state_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StateConflict, message)
    }

    /// Create an InternalError.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Render the wire body for the given runtime mode.
    ///
    /// Development mode carries the debug rendering of the error; production
    /// replaces it with a fixed placeholder.
    pub fn into_body(mut self, mode: RuntimeMode) -> Self {
        self.stack = Some(match mode {
            RuntimeMode::Production => STACK_PLACEHOLDER.to_string(),
            RuntimeMode::Development => format!("{}: {:?}", self.code, self.message),
        });
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// ============================================================================
// AXUM INTEGRATION
// ============================================================================

/// Implement IntoResponse for ApiError to enable automatic error handling
/// in Axum. This is the "final stage" of error normalization: every failure
/// a handler returns leaves the process as the same JSON body shape.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.into_body(runtime_mode()));
        (status, body).into_response()
    }
}

// ============================================================================
// CONVERSIONS FROM DOMAIN ERRORS
// ============================================================================

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity_type, id } => {
                ApiError::entity_not_found(&entity_type.to_string(), id)
            }
            StoreError::DuplicateId { entity_type, id } => ApiError::state_conflict(format!(
                "{} with id {} already exists",
                entity_type, id
            )),
            StoreError::UpdateFailed { reason, .. } => ApiError::internal_error(reason),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::RequiredFieldMissing { field } => ApiError::missing_field(&field),
            ValidationError::InvalidValue { field, reason } => {
                ApiError::validation_failed(format!("Invalid value for {}: {}", field, reason))
                    .with_errors(vec![FieldError::new(field, reason)])
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization error: {:?}", err);
        ApiError::invalid_input(format!("Invalid JSON: {}", err))
    }
}

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_status_mapping() {
        assert_eq!(
            ErrorCode::ValidationFailed.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::MissingField.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::StateConflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::InternalError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_field_carries_field_errors() {
        let err = ApiError::missing_field("title");
        assert_eq!(err.code, ErrorCode::MissingField);
        assert!(err.message.contains("title"));
        let errors = err.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn test_route_not_found_message_carries_path() {
        let err = ApiError::route_not_found("/api/v1/nope");
        assert_eq!(err.code, ErrorCode::RouteNotFound);
        assert_eq!(err.message, "Not Found - /api/v1/nope");
    }

    #[test]
    fn test_stack_elided_in_production() {
        let body = ApiError::internal_error("boom").into_body(RuntimeMode::Production);
        assert_eq!(body.stack.as_deref(), Some(STACK_PLACEHOLDER));

        let body = ApiError::internal_error("boom").into_body(RuntimeMode::Development);
        let stack = body.stack.unwrap();
        assert_ne!(stack, STACK_PLACEHOLDER);
        assert!(stack.contains("boom"));
    }

    #[test]
    fn test_error_serialization_skips_absent_fields() {
        let err = ApiError::entity_not_found("Tenant", uuid::Uuid::nil());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("NOT_FOUND"));
        assert!(!json.contains("\"stack\""));
        assert!(!json.contains("\"errors\""));

        let back: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_store_error_conversion() {
        let err: ApiError = StoreError::NotFound {
            entity_type: leaseify_core::EntityType::Payment,
            id: uuid::Uuid::nil(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("Payment"));
    }
}
