use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        submission::{SubmissionDto, SubmissionWriteDto},
    },
    server::{
        error::AppError, model::submission::SubmissionParams,
        service::submission::SubmissionService, state::AppState,
    },
};

/// Tag for grouping submission endpoints in OpenAPI documentation
pub static SUBMISSION_TAG: &str = "submission";

fn submission_not_found() -> AppError {
    AppError::NotFound("Submission not found".to_string())
}

#[utoipa::path(
    get,
    path = "/submission",
    tag = SUBMISSION_TAG,
    responses(
        (status = 200, description = "All submissions with answers", body = Vec<SubmissionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_submissions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let submissions = SubmissionService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            submissions
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Start a submission for an applicant.
///
/// Each applicant may hold a single submission. Status defaults to `Draft`.
///
/// # Returns
/// - `201 Created` - Created submission
/// - `400 Bad Request` - Unknown form or applicant, duplicate submission, or submitting
///   with required questions unanswered
#[utoipa::path(
    post,
    path = "/submission",
    tag = SUBMISSION_TAG,
    request_body = SubmissionWriteDto,
    responses(
        (status = 201, description = "Created submission", body = SubmissionDto),
        (status = 400, description = "Invalid or duplicate submission", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_submission(
    State(state): State<AppState>,
    Json(payload): Json<SubmissionWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let submission = SubmissionService::new(&state.db)
        .create(SubmissionParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(submission.into_dto())))
}

#[utoipa::path(
    get,
    path = "/submission/{submission}",
    tag = SUBMISSION_TAG,
    params(("submission" = i32, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Submission with answers", body = SubmissionDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_submission(
    State(state): State<AppState>,
    Path(submission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let submission = SubmissionService::new(&state.db)
        .get_by_id(submission_id)
        .await?
        .ok_or_else(submission_not_found)?;

    Ok((StatusCode::OK, Json(submission.into_dto())))
}

/// Replace a submission's form, applicant and status.
///
/// A submitted application cannot return to `Draft`.
#[utoipa::path(
    put,
    path = "/submission/{submission}",
    tag = SUBMISSION_TAG,
    params(("submission" = i32, Path, description = "Submission ID")),
    request_body = SubmissionWriteDto,
    responses(
        (status = 200, description = "Updated submission", body = SubmissionDto),
        (status = 400, description = "Invalid submission change", body = ValidationErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_submission(
    State(state): State<AppState>,
    Path(submission_id): Path<i32>,
    Json(payload): Json<SubmissionWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let submission = SubmissionService::new(&state.db)
        .update(submission_id, SubmissionParams::from_dto(payload))
        .await?
        .ok_or_else(submission_not_found)?;

    Ok((StatusCode::OK, Json(submission.into_dto())))
}

/// Delete a submission with its answers and uploaded files.
#[utoipa::path(
    delete,
    path = "/submission/{submission}",
    tag = SUBMISSION_TAG,
    params(("submission" = i32, Path, description = "Submission ID")),
    responses(
        (status = 204, description = "Submission deleted"),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_submission(
    State(state): State<AppState>,
    Path(submission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !SubmissionService::new(&state.db)
        .delete(&state.file_store, submission_id)
        .await?
    {
        return Err(submission_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Finalize a draft submission.
///
/// # Returns
/// - `200 OK` - Submission now `Submitted`
/// - `400 Bad Request` - A required question has no answer
/// - `404 Not Found` - Submission doesn't exist
#[utoipa::path(
    post,
    path = "/submission/{submission}/submit",
    tag = SUBMISSION_TAG,
    params(("submission" = i32, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Submitted application", body = SubmissionDto),
        (status = 400, description = "Required answers missing", body = ValidationErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_submission(
    State(state): State<AppState>,
    Path(submission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let submission = SubmissionService::new(&state.db)
        .submit(submission_id)
        .await?
        .ok_or_else(submission_not_found)?;

    Ok((StatusCode::OK, Json(submission.into_dto())))
}
