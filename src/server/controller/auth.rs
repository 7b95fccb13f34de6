use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::session::AuthSession,
        model::user::{LoginParams, RegisterParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a user account with an optional club.
///
/// Creates the user and their profile together. Does not log the user in.
///
/// # Returns
/// - `201 Created` - Registered user
/// - `400 Bad Request` - Invalid fields, unknown club, or username taken
#[utoipa::path(
    post,
    path = "/register/",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Registered user", body = UserDto),
        (status = 400, description = "Invalid registration", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .register(RegisterParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with username and password.
///
/// On success the session cookie identifies the user on later requests.
///
/// # Returns
/// - `200 OK` - Logged-in user
/// - `401 Unauthorized` - Unknown username or wrong password
#[utoipa::path(
    post,
    path = "/login/",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged-in user", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .login(LoginParams::from_dto(payload))
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;
    tracing::info!("User {} logged in", user.id);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out by clearing the session.
#[utoipa::path(
    post,
    path = "/logout/",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}
