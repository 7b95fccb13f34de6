//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` handle
/// their own response mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Field-level validation failure on a write payload.
    ///
    /// Results in 400 Bad Request with a field to messages map.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Write rejected because it would duplicate a unique pair.
    ///
    /// Results in 400 Bad Request with the same body shape as `Validation`; clients
    /// rely on 400 for duplicate submissions and answers.
    #[error("Uniqueness conflict: {0}")]
    Conflict(ValidationError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Unexpected state inside the application, such as an unknown stored enum value.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Filesystem error while storing or removing uploaded answer files.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, such as a body that fails to deserialize.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, `Conflict` and `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else, logged server-side
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    error: "Validation failed".to_string(),
                    fields: err.into_fields(),
                }),
            )
                .into_response(),
            Self::Conflict(err) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    error: "Record already exists".to_string(),
                    fields: err.into_fields(),
                }),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = AppError::Validation(ValidationError::field("title", "This field may not be blank."));

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn conflict_maps_to_bad_request() {
        let err = AppError::Conflict(ValidationError::field(
            "applicant",
            "This applicant already has a submission.",
        ));

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound("Club not found".to_string());

        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_error_is_hidden_behind_500() {
        let err = AppError::DbErr(sea_orm::DbErr::Custom("boom".to_string()));

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
