use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        club::{ClubDto, ClubWriteDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::club::ClubParams,
        service::club::ClubService, state::AppState,
    },
};

/// Tag for grouping club endpoints in OpenAPI documentation
pub static CLUB_TAG: &str = "club";

/// List clubs.
///
/// Anonymous callers see every club. Logged-in users see only their own club, or
/// nothing when their profile has no club.
#[utoipa::path(
    get,
    path = "/club",
    tag = CLUB_TAG,
    responses(
        (status = 200, description = "Clubs visible to the caller", body = Vec<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clubs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).scope().await?;

    let clubs = ClubService::new(&state.db).get_all(&scope).await?;

    Ok((
        StatusCode::OK,
        Json(clubs.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a club.
///
/// # Access Control
/// - Requires a logged-in user
///
/// # Returns
/// - `201 Created` - Created club
/// - `400 Bad Request` - Invalid name
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/club",
    tag = CLUB_TAG,
    request_body = ClubWriteDto,
    responses(
        (status = 201, description = "Created club", body = ClubDto),
        (status = 400, description = "Invalid club data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_club(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ClubWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).require_scope().await?;

    let club = ClubService::new(&state.db)
        .create(&scope, ClubParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(club.into_dto())))
}

/// Get a club.
#[utoipa::path(
    get,
    path = "/club/{club}",
    tag = CLUB_TAG,
    params(("club" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Club", body = ClubDto),
        (status = 404, description = "Club not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club(
    State(state): State<AppState>,
    session: Session,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).scope().await?;

    let club = ClubService::new(&state.db)
        .get_by_id(&scope, club_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Club not found".to_string()))?;

    Ok((StatusCode::OK, Json(club.into_dto())))
}

/// Rename a club.
///
/// # Access Control
/// - Requires a logged-in user belonging to the club
///
/// # Returns
/// - `200 OK` - Updated club
/// - `400 Bad Request` - Invalid name
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Club doesn't exist or is not the caller's
#[utoipa::path(
    put,
    path = "/club/{club}",
    tag = CLUB_TAG,
    params(("club" = i32, Path, description = "Club ID")),
    request_body = ClubWriteDto,
    responses(
        (status = 200, description = "Updated club", body = ClubDto),
        (status = 400, description = "Invalid club data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_club(
    State(state): State<AppState>,
    session: Session,
    Path(club_id): Path<i32>,
    Json(payload): Json<ClubWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).require_scope().await?;

    let club = ClubService::new(&state.db)
        .update(&scope, club_id, ClubParams::from_dto(payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Club not found".to_string()))?;

    Ok((StatusCode::OK, Json(club.into_dto())))
}

/// Delete a club along with its forms and applicants.
#[utoipa::path(
    delete,
    path = "/club/{club}",
    tag = CLUB_TAG,
    params(("club" = i32, Path, description = "Club ID")),
    responses(
        (status = 204, description = "Club deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_club(
    State(state): State<AppState>,
    session: Session,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).require_scope().await?;

    if !ClubService::new(&state.db).delete(&scope, club_id).await? {
        return Err(AppError::NotFound("Club not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
