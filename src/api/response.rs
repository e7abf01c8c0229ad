//! Response types for the child support API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

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
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
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
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        // Every engine error is a caller-input error, so they all map to 400.
        match error {
            EngineError::AgeOutOfRange { age } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "AGE_OUT_OF_RANGE",
                    format!("Child age out of supported range (0~18): {}", age),
                    "The guideline table covers child ages 0 through 18",
                ),
            },
            EngineError::NegativeIncome { parent, amount_krw } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NEGATIVE_INCOME",
                    format!(
                        "Income for the {} parent cannot be negative: {} KRW",
                        parent, amount_krw
                    ),
                    "Provide a non-negative income or an imputed income fallback",
                ),
            },
            EngineError::EmptyChildren => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("EMPTY_CHILDREN", "At least one child is required"),
            },
            EngineError::InvalidAdjustment { name, kind } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ADJUSTMENT",
                    format!("Unknown adjustment kind '{}' for adjustment '{}'", kind, name),
                    "Recognized kinds are 'multiplier', 'add', and 'subtract'",
                ),
            },
            EngineError::AmountOverflow { context } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "AMOUNT_OVERFLOW",
                    format!(
                        "Monetary amount out of representable range while computing {}",
                        context
                    ),
                    "Supply incomes and adjustment values in realistic KRW ranges",
                ),
            },
        }
    }
}
