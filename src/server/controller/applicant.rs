use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        applicant::{ApplicantDto, ApplicantWriteDto, StageChangeDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::applicant::{ApplicantFilter, ApplicantOrdering, ApplicantParams},
        service::applicant::ApplicantService,
        state::AppState,
        util::body::JsonOrMultipart,
    },
};

/// Tag for grouping applicant endpoints in OpenAPI documentation
pub static APPLICANT_TAG: &str = "applicant";

#[derive(Deserialize)]
pub struct OrderingParams {
    pub ordering: Option<String>,
}

fn applicant_not_found() -> AppError {
    AppError::NotFound("Applicant not found".to_string())
}

fn nested(club_id: i32, form_id: i32) -> ApplicantFilter {
    ApplicantFilter {
        club_id: Some(club_id),
        form_id: Some(form_id),
    }
}

/// List applicants of the caller's club.
///
/// Anonymous callers and users without a club get an empty list.
#[utoipa::path(
    get,
    path = "/applicant",
    tag = APPLICANT_TAG,
    params(
        ("ordering" = Option<String>, Query, description = "first_name, last_name or year, prefix with - for descending")
    ),
    responses(
        (status = 200, description = "Applicants with their submissions", body = Vec<ApplicantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applicants(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<OrderingParams>,
) -> Result<impl IntoResponse, AppError> {
    list(state, session, ApplicantFilter::default(), params).await
}

/// Register an applicant.
///
/// Open to anonymous callers. Stage always starts at `Applied`.
#[utoipa::path(
    post,
    path = "/applicant",
    tag = APPLICANT_TAG,
    request_body = ApplicantWriteDto,
    responses(
        (status = 201, description = "Created applicant", body = ApplicantDto),
        (status = 400, description = "Invalid applicant data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_applicant(
    State(state): State<AppState>,
    Json(payload): Json<ApplicantWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    create(state, payload, None).await
}

/// Self-registration endpoint for applicants.
///
/// Accepts the same fields as `POST /applicant` either as JSON or multipart form data.
#[utoipa::path(
    post,
    path = "/applicants/",
    tag = APPLICANT_TAG,
    request_body(
        content = ApplicantWriteDto,
        content_type = "multipart/form-data"
    ),
    responses(
        (status = 201, description = "Created applicant", body = ApplicantDto),
        (status = 400, description = "Invalid applicant data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_applicant(
    State(state): State<AppState>,
    body: JsonOrMultipart<ApplicantWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    create(state, body.data, None).await
}

#[utoipa::path(
    get,
    path = "/applicant/{applicant}",
    tag = APPLICANT_TAG,
    params(("applicant" = i32, Path, description = "Applicant ID")),
    responses(
        (status = 200, description = "Applicant", body = ApplicantDto),
        (status = 404, description = "Applicant not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applicant(
    State(state): State<AppState>,
    session: Session,
    Path(applicant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    get(state, session, ApplicantFilter::default(), applicant_id).await
}

/// Replace an applicant's writable fields.
///
/// Stage and the derived pass flags cannot be changed here.
#[utoipa::path(
    put,
    path = "/applicant/{applicant}",
    tag = APPLICANT_TAG,
    params(("applicant" = i32, Path, description = "Applicant ID")),
    request_body = ApplicantWriteDto,
    responses(
        (status = 200, description = "Updated applicant", body = ApplicantDto),
        (status = 400, description = "Invalid applicant data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Target club belongs to another user", body = ErrorDto),
        (status = 404, description = "Applicant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_applicant(
    State(state): State<AppState>,
    session: Session,
    Path(applicant_id): Path<i32>,
    Json(payload): Json<ApplicantWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    update(
        state,
        session,
        ApplicantFilter::default(),
        applicant_id,
        payload,
        None,
    )
    .await
}

#[utoipa::path(
    delete,
    path = "/applicant/{applicant}",
    tag = APPLICANT_TAG,
    params(("applicant" = i32, Path, description = "Applicant ID")),
    responses(
        (status = 204, description = "Applicant deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Applicant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_applicant(
    State(state): State<AppState>,
    session: Session,
    Path(applicant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    delete(state, session, ApplicantFilter::default(), applicant_id).await
}

/// Move an applicant through the review pipeline.
///
/// Allowed moves: `Applied` to `PassedScreening`, `PassedScreening` to
/// `PassedFirstRound`, `PassedFirstRound` to `PassedSecondRound`, and any non-final
/// stage to `Rejected`.
///
/// # Returns
/// - `200 OK` - Applicant with the new stage
/// - `400 Bad Request` - Transition not allowed
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Applicant doesn't exist or is not in the caller's club
#[utoipa::path(
    post,
    path = "/applicant/{applicant}/stage",
    tag = APPLICANT_TAG,
    params(("applicant" = i32, Path, description = "Applicant ID")),
    request_body = StageChangeDto,
    responses(
        (status = 200, description = "Applicant with new stage", body = ApplicantDto),
        (status = 400, description = "Transition not allowed", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Applicant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_stage(
    State(state): State<AppState>,
    session: Session,
    Path(applicant_id): Path<i32>,
    Json(payload): Json<StageChangeDto>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).require_scope().await?;

    let applicant = ApplicantService::new(&state.db)
        .change_stage(&scope, applicant_id, payload.stage)
        .await?
        .ok_or_else(applicant_not_found)?;

    Ok((StatusCode::OK, Json(applicant.into_dto())))
}

/// List the applicants of one form in the caller's club.
#[utoipa::path(
    get,
    path = "/club/{club}/application/{application}/applicant",
    tag = APPLICANT_TAG,
    params(
        ("club" = i32, Path, description = "Club ID"),
        ("application" = i32, Path, description = "Application form ID"),
        ("ordering" = Option<String>, Query, description = "first_name, last_name or year, prefix with - for descending")
    ),
    responses(
        (status = 200, description = "Applicants of the form", body = Vec<ApplicantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_form_applicants(
    State(state): State<AppState>,
    session: Session,
    Path((club_id, form_id)): Path<(i32, i32)>,
    Query(params): Query<OrderingParams>,
) -> Result<impl IntoResponse, AppError> {
    list(state, session, nested(club_id, form_id), params).await
}

/// Register an applicant for a form. Club and form come from the path.
#[utoipa::path(
    post,
    path = "/club/{club}/application/{application}/applicant",
    tag = APPLICANT_TAG,
    params(
        ("club" = i32, Path, description = "Club ID"),
        ("application" = i32, Path, description = "Application form ID")
    ),
    request_body = ApplicantWriteDto,
    responses(
        (status = 201, description = "Created applicant", body = ApplicantDto),
        (status = 400, description = "Invalid applicant data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_form_applicant(
    State(state): State<AppState>,
    Path((club_id, form_id)): Path<(i32, i32)>,
    Json(payload): Json<ApplicantWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    create(state, payload, Some((club_id, form_id))).await
}

#[utoipa::path(
    get,
    path = "/club/{club}/application/{application}/applicant/{applicant}",
    tag = APPLICANT_TAG,
    params(
        ("club" = i32, Path, description = "Club ID"),
        ("application" = i32, Path, description = "Application form ID"),
        ("applicant" = i32, Path, description = "Applicant ID")
    ),
    responses(
        (status = 200, description = "Applicant", body = ApplicantDto),
        (status = 404, description = "Applicant not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_form_applicant(
    State(state): State<AppState>,
    session: Session,
    Path((club_id, form_id, applicant_id)): Path<(i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    get(state, session, nested(club_id, form_id), applicant_id).await
}

#[utoipa::path(
    put,
    path = "/club/{club}/application/{application}/applicant/{applicant}",
    tag = APPLICANT_TAG,
    params(
        ("club" = i32, Path, description = "Club ID"),
        ("application" = i32, Path, description = "Application form ID"),
        ("applicant" = i32, Path, description = "Applicant ID")
    ),
    request_body = ApplicantWriteDto,
    responses(
        (status = 200, description = "Updated applicant", body = ApplicantDto),
        (status = 400, description = "Invalid applicant data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Applicant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_form_applicant(
    State(state): State<AppState>,
    session: Session,
    Path((club_id, form_id, applicant_id)): Path<(i32, i32, i32)>,
    Json(payload): Json<ApplicantWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    update(
        state,
        session,
        nested(club_id, form_id),
        applicant_id,
        payload,
        Some((club_id, form_id)),
    )
    .await
}

#[utoipa::path(
    delete,
    path = "/club/{club}/application/{application}/applicant/{applicant}",
    tag = APPLICANT_TAG,
    params(
        ("club" = i32, Path, description = "Club ID"),
        ("application" = i32, Path, description = "Application form ID"),
        ("applicant" = i32, Path, description = "Applicant ID")
    ),
    responses(
        (status = 204, description = "Applicant deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Applicant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_form_applicant(
    State(state): State<AppState>,
    session: Session,
    Path((club_id, form_id, applicant_id)): Path<(i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    delete(state, session, nested(club_id, form_id), applicant_id).await
}

async fn list(
    state: AppState,
    session: Session,
    filter: ApplicantFilter,
    params: OrderingParams,
) -> Result<(StatusCode, Json<Vec<ApplicantDto>>), AppError> {
    let scope = AuthGuard::new(&state.db, &session).scope().await?;
    let ordering = ApplicantOrdering::parse(params.ordering.as_deref());

    let applicants = ApplicantService::new(&state.db)
        .get_all(&scope, filter, ordering)
        .await?;

    Ok((
        StatusCode::OK,
        Json(applicants.into_iter().map(|a| a.into_dto()).collect()),
    ))
}

async fn create(
    state: AppState,
    payload: ApplicantWriteDto,
    path: Option<(i32, i32)>,
) -> Result<(StatusCode, Json<ApplicantDto>), AppError> {
    let params = ApplicantParams::from_dto(payload, path)?;

    let applicant = ApplicantService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(applicant.into_dto())))
}

async fn get(
    state: AppState,
    session: Session,
    filter: ApplicantFilter,
    applicant_id: i32,
) -> Result<(StatusCode, Json<ApplicantDto>), AppError> {
    let scope = AuthGuard::new(&state.db, &session).scope().await?;

    let applicant = ApplicantService::new(&state.db)
        .get_by_id(&scope, filter, applicant_id)
        .await?
        .ok_or_else(applicant_not_found)?;

    Ok((StatusCode::OK, Json(applicant.into_dto())))
}

async fn update(
    state: AppState,
    session: Session,
    filter: ApplicantFilter,
    applicant_id: i32,
    payload: ApplicantWriteDto,
    path: Option<(i32, i32)>,
) -> Result<(StatusCode, Json<ApplicantDto>), AppError> {
    let scope = AuthGuard::new(&state.db, &session).require_scope().await?;
    let params = ApplicantParams::from_dto(payload, path)?;

    let applicant = ApplicantService::new(&state.db)
        .update(&scope, filter, applicant_id, params)
        .await?
        .ok_or_else(applicant_not_found)?;

    Ok((StatusCode::OK, Json(applicant.into_dto())))
}

async fn delete(
    state: AppState,
    session: Session,
    filter: ApplicantFilter,
    applicant_id: i32,
) -> Result<StatusCode, AppError> {
    let scope = AuthGuard::new(&state.db, &session).require_scope().await?;

    if !ApplicantService::new(&state.db)
        .delete(&scope, filter, applicant_id)
        .await?
    {
        return Err(applicant_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
