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
        form::{QuestionDto, QuestionWriteDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::form::{CreateQuestionParams, UpdateQuestionParams},
        service::question::QuestionService,
        state::AppState,
    },
};

/// Tag for grouping question endpoints in OpenAPI documentation
pub static QUESTION_TAG: &str = "question";

fn question_not_found() -> AppError {
    AppError::NotFound("Question not found".to_string())
}

/// List a form's questions ordered by id.
#[utoipa::path(
    get,
    path = "/club/{club}/application/{application}/question",
    tag = QUESTION_TAG,
    params(
        ("club" = i32, Path, description = "Club ID"),
        ("application" = i32, Path, description = "Application form ID")
    ),
    responses(
        (status = 200, description = "Questions of the form", body = Vec<QuestionDto>),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_questions(
    State(state): State<AppState>,
    session: Session,
    Path((club_id, form_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).scope().await?;

    let questions = QuestionService::new(&state.db)
        .get_all(&scope, club_id, form_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application form not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(questions.into_iter().map(|q| q.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Add a question to a form.
///
/// Marks the form as updated.
///
/// # Access Control
/// - Requires a logged-in user belonging to the path club
#[utoipa::path(
    post,
    path = "/club/{club}/application/{application}/question",
    tag = QUESTION_TAG,
    params(
        ("club" = i32, Path, description = "Club ID"),
        ("application" = i32, Path, description = "Application form ID")
    ),
    request_body = QuestionWriteDto,
    responses(
        (status = 201, description = "Created question", body = QuestionDto),
        (status = 400, description = "Invalid question data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Club belongs to another user", body = ErrorDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_question(
    State(state): State<AppState>,
    session: Session,
    Path((club_id, form_id)): Path<(i32, i32)>,
    Json(payload): Json<QuestionWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).require_scope().await?;

    let question = QuestionService::new(&state.db)
        .create(&scope, club_id, CreateQuestionParams::from_dto(form_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(question.into_dto())))
}

#[utoipa::path(
    get,
    path = "/club/{club}/application/{application}/question/{question}",
    tag = QUESTION_TAG,
    params(
        ("club" = i32, Path, description = "Club ID"),
        ("application" = i32, Path, description = "Application form ID"),
        ("question" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question", body = QuestionDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_question(
    State(state): State<AppState>,
    session: Session,
    Path((club_id, form_id, question_id)): Path<(i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).scope().await?;

    let question = QuestionService::new(&state.db)
        .get_by_id(&scope, club_id, form_id, question_id)
        .await?
        .ok_or_else(question_not_found)?;

    Ok((StatusCode::OK, Json(question.into_dto())))
}

/// Replace a question's prompt, type and required flag.
#[utoipa::path(
    put,
    path = "/club/{club}/application/{application}/question/{question}",
    tag = QUESTION_TAG,
    params(
        ("club" = i32, Path, description = "Club ID"),
        ("application" = i32, Path, description = "Application form ID"),
        ("question" = i32, Path, description = "Question ID")
    ),
    request_body = QuestionWriteDto,
    responses(
        (status = 200, description = "Updated question", body = QuestionDto),
        (status = 400, description = "Invalid question data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_question(
    State(state): State<AppState>,
    session: Session,
    Path((club_id, form_id, question_id)): Path<(i32, i32, i32)>,
    Json(payload): Json<QuestionWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).require_scope().await?;

    let question = QuestionService::new(&state.db)
        .update(
            &scope,
            club_id,
            form_id,
            UpdateQuestionParams::from_dto(question_id, payload),
        )
        .await?
        .ok_or_else(question_not_found)?;

    Ok((StatusCode::OK, Json(question.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/club/{club}/application/{application}/question/{question}",
    tag = QUESTION_TAG,
    params(
        ("club" = i32, Path, description = "Club ID"),
        ("application" = i32, Path, description = "Application form ID"),
        ("question" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 204, description = "Question deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_question(
    State(state): State<AppState>,
    session: Session,
    Path((club_id, form_id, question_id)): Path<(i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let scope = AuthGuard::new(&state.db, &session).require_scope().await?;

    if !QuestionService::new(&state.db)
        .delete(&scope, club_id, form_id, question_id)
        .await?
    {
        return Err(question_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
