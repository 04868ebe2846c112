//! HTTP error handling and response types.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::db::repository::RepositoryError;
use crate::services::AnalysisError;

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// API error response body.
///
/// `detail` carries the human-readable message clients display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub detail: String,
    /// Per-field problems for validation errors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = errors;
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Request is well-formed but cannot be served in the current state
    BadRequest(String),
    /// Request body or path failed validation
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },
    /// Request body exceeds the configured limit
    PayloadTooLarge(String),
    /// Repository error
    Repository(RepositoryError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Repository(e) => match e {
                RepositoryError::NotFound { .. } => StatusCode::NOT_FOUND,
                RepositoryError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                RepositoryError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            AppError::BadRequest(msg) => ApiError::new("BAD_REQUEST", msg),
            AppError::Validation { message, errors } => {
                warn!(%message, "request rejected");
                ApiError::new("VALIDATION_ERROR", message).with_errors(errors)
            }
            AppError::PayloadTooLarge(msg) => {
                warn!(%msg, "request body too large");
                ApiError::new("PAYLOAD_TOO_LARGE", msg)
            }
            AppError::Repository(e) => match e {
                RepositoryError::NotFound { ref message, .. } => {
                    ApiError::new("NOT_FOUND", message.clone())
                }
                RepositoryError::ValidationError {
                    ref message,
                    ref context,
                } => {
                    warn!(error = %e, "request rejected");
                    let errors = context
                        .details
                        .iter()
                        .map(|field| FieldError {
                            field: field.clone(),
                            message: message.clone(),
                        })
                        .collect();
                    ApiError::new("VALIDATION_ERROR", message.clone()).with_errors(errors)
                }
                RepositoryError::InternalError { ref message, .. } => {
                    error!(error = %e, "repository error");
                    ApiError::new("REPOSITORY_ERROR", message.clone())
                }
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Repository(e) => AppError::Repository(e),
            AnalysisError::NoContent => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        // Body limit violations surface as a buffering failure with status 413.
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge(rejection.body_text());
        }
        AppError::Validation {
            message: rejection.body_text(),
            errors: vec![FieldError {
                field: "body".to_string(),
                message: rejection.body_text(),
            }],
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation {
            message: rejection.body_text(),
            errors: vec![FieldError {
                field: "path".to_string(),
                message: rejection.body_text(),
            }],
        }
    }
}
