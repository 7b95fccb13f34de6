use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The caller is not logged in. Results in a 401 Unauthorized response.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The user ID stored in the session no longer exists in the database.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session was not found in the database")]
    UserNotInDatabase(i32),

    /// Username or password did not match during login.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The logged in user is not allowed to perform the requested action.
    ///
    /// Carries the user ID and a description for logging. Results in a 403 Forbidden
    /// response.
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level while keeping client-facing messages generic.
///
/// # Returns
/// - 401 Unauthorized - For missing sessions, stale users and bad credentials
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication credentials were not provided.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "No active account found with the given credentials".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
