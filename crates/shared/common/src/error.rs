//! Unified error handling for the course manager.
//!
//! Provides a single error type that is returned by repositories and the
//! course service, and converted to an Axum HTTP response at the edge.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{CourseConstraint, DomainError};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Input errors
    #[error("{0} cannot be nil")]
    NilInput(String),

    #[error("validation failed: {0}")]
    Constraint(CourseConstraint),

    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Resource errors
    #[error("Course with UUID = {0} not found")]
    CourseNotFound(Uuid),

    #[error("{0} already exists")]
    Conflict(String),

    // Storage errors
    #[error("{stage}: {source}")]
    Repository {
        stage: &'static str,
        #[source]
        source: Box<AppError>,
    },

    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NilInput(_) => "NIL_INPUT",
            AppError::Constraint(_) => "CONSTRAINT_VIOLATION",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::CourseNotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Repository { .. } => "REPOSITORY_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NilInput(_)
            | AppError::Constraint(_)
            | AppError::Validation(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::CourseNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),

            // Hide details for storage and internal errors
            AppError::Repository { stage, source } => {
                tracing::error!(stage = %stage, "Repository error: {}", source);
                "An internal error occurred".to_string()
            }
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NilInput(item) => AppError::NilInput(item),
            DomainError::Constraint(constraint) => AppError::Constraint(constraint),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn nil_input(item: impl Into<String>) -> Self {
        AppError::NilInput(item.into())
    }

    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Wrap a storage failure with the stage it happened in.
    pub fn repository(stage: &'static str, source: AppError) -> Self {
        AppError::Repository {
            stage,
            source: Box::new(source),
        }
    }
}

/// Extension trait for attaching a repository stage to a result.
pub trait ResultExt<T> {
    fn stage(self, stage: &'static str) -> AppResult<T>;
}

impl<T> ResultExt<T> for AppResult<T> {
    fn stage(self, stage: &'static str) -> AppResult<T> {
        self.map_err(|e| AppError::repository(stage, e))
    }
}
