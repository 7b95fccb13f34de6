use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        user::{RegisterDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::user::RegisterParams,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List the users of the caller's club.
///
/// Users without a club only see themselves.
#[utoipa::path(
    get,
    path = "/users/",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Users visible to the caller", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let users = UserService::new(&state.db).list_for(&user).await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a user. Same behavior as `POST /register/`.
#[utoipa::path(
    post,
    path = "/users/",
    tag = USER_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .register(RegisterParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
