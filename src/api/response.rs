//! Response types for the Quote Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::validation::{ContactValidationErrors, FieldError};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Per-field failures for contact validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            fields: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
            fields: None,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a contact validation error carrying every field failure.
    pub fn contact_validation(errors: ContactValidationErrors) -> Self {
        Self {
            code: "VALIDATION_ERROR".to_string(),
            message: errors.to_string(),
            details: None,
            fields: Some(errors.errors),
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<QuoteError> for ApiErrorResponse {
    fn from(error: QuoteError) -> Self {
        match error {
            QuoteError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            QuoteError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            QuoteError::PolicyNotFound { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "POLICY_NOT_FOUND",
                    format!("No pricing policy found for date {}", date),
                    "The quote date precedes every configured pricing policy",
                ),
            },
            QuoteError::FrequencyNotCovered { nights_per_week } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "FREQUENCY_NOT_COVERED",
                    format!(
                        "No frequency multiplier defined for {} nights/week",
                        nights_per_week
                    ),
                    "Supported collection frequencies are defined by the pricing policy",
                ),
            },
            QuoteError::PropertyTypeNotCovered { property_type } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "PROPERTY_TYPE_NOT_COVERED",
                    format!(
                        "No property multiplier defined for property type '{}'",
                        property_type
                    ),
                    "Supported property types are defined by the pricing policy",
                ),
            },
            QuoteError::InvalidQuote { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_QUOTE",
                    format!("Invalid quote field '{}': {}", field, message),
                    "The quote request contains invalid information",
                ),
            },
            QuoteError::InvalidZip { input } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ZIP",
                    "Please enter a valid 5-digit ZIP code",
                    format!("'{}' is not a 5-digit ZIP code", input),
                ),
            },
        }
    }
}

/// Success body for the `/contact/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactValidationResponse {
    /// Always true; failures are reported as an [`ApiError`] instead.
    pub valid: bool,
}
