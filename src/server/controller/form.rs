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
        form::{ApplicationFormDto, ApplicationFormWriteDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::form::{CreateApplicationFormParams, UpdateApplicationFormParams},
        service::form::ApplicationFormService,
        state::AppState,
    },
};

/// Tag for grouping application form endpoints in OpenAPI documentation
pub static FORM_TAG: &str = "application";

/// List a club's application forms with their questions.
///
/// Logged-in users with a club only see forms when the path club is theirs. Other
/// callers see the forms of any club.
#[utoipa::path(
    get,
    path = "/club/{club}/application",
    tag = FORM_TAG,
    params(("club" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Application forms", body = Vec<ApplicationFormDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_forms(
    State(state): State<AppState>,
    session: Session,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).scope().await?;

    let forms = ApplicationFormService::new(&state.db)
        .get_all(&scope, club_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(forms.into_iter().map(|f| f.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create an application form in a club.
///
/// # Access Control
/// - Requires a logged-in user belonging to the path club
///
/// # Returns
/// - `201 Created` - Created form without questions
/// - `400 Bad Request` - Invalid title
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Path club is not the caller's
/// - `404 Not Found` - Club doesn't exist
#[utoipa::path(
    post,
    path = "/club/{club}/application",
    tag = FORM_TAG,
    params(("club" = i32, Path, description = "Club ID")),
    request_body = ApplicationFormWriteDto,
    responses(
        (status = 201, description = "Created application form", body = ApplicationFormDto),
        (status = 400, description = "Invalid form data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Club belongs to another user", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_form(
    State(state): State<AppState>,
    session: Session,
    Path(club_id): Path<i32>,
    Json(payload): Json<ApplicationFormWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).require_scope().await?;

    let form = ApplicationFormService::new(&state.db)
        .create(&scope, CreateApplicationFormParams::from_dto(club_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(form.into_dto())))
}

/// Get an application form with its questions.
#[utoipa::path(
    get,
    path = "/club/{club}/application/{application}",
    tag = FORM_TAG,
    params(
        ("club" = i32, Path, description = "Club ID"),
        ("application" = i32, Path, description = "Application form ID")
    ),
    responses(
        (status = 200, description = "Application form", body = ApplicationFormDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_form(
    State(state): State<AppState>,
    session: Session,
    Path((club_id, form_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).scope().await?;

    let form = ApplicationFormService::new(&state.db)
        .get_by_id(&scope, club_id, form_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application form not found".to_string()))?;

    Ok((StatusCode::OK, Json(form.into_dto())))
}

/// Retitle an application form.
///
/// Read-only fields in the body (`id`, `club`, `questions`, timestamps) are ignored.
#[utoipa::path(
    put,
    path = "/club/{club}/application/{application}",
    tag = FORM_TAG,
    params(
        ("club" = i32, Path, description = "Club ID"),
        ("application" = i32, Path, description = "Application form ID")
    ),
    request_body = ApplicationFormWriteDto,
    responses(
        (status = 200, description = "Updated application form", body = ApplicationFormDto),
        (status = 400, description = "Invalid form data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_form(
    State(state): State<AppState>,
    session: Session,
    Path((club_id, form_id)): Path<(i32, i32)>,
    Json(payload): Json<ApplicationFormWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).require_scope().await?;

    let form = ApplicationFormService::new(&state.db)
        .update(
            &scope,
            club_id,
            UpdateApplicationFormParams::from_dto(form_id, payload),
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Application form not found".to_string()))?;

    Ok((StatusCode::OK, Json(form.into_dto())))
}

/// Delete an application form and its questions.
#[utoipa::path(
    delete,
    path = "/club/{club}/application/{application}",
    tag = FORM_TAG,
    params(
        ("club" = i32, Path, description = "Club ID"),
        ("application" = i32, Path, description = "Application form ID")
    ),
    responses(
        (status = 204, description = "Form deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_form(
    State(state): State<AppState>,
    session: Session,
    Path((club_id, form_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).require_scope().await?;

    if !ApplicationFormService::new(&state.db)
        .delete(&scope, club_id, form_id)
        .await?
    {
        return Err(AppError::NotFound("Application form not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
