use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        submission::{AnswerDto, AnswerWriteDto},
    },
    server::{
        error::AppError,
        model::submission::{AnswerParams, AnswerUpload},
        service::answer::AnswerService,
        state::AppState,
        util::body::JsonOrMultipart,
    },
};

/// Tag for grouping answer endpoints in OpenAPI documentation
pub static ANSWER_TAG: &str = "answer";

/// Multipart field carrying an uploaded answer file.
pub const ANSWER_FILE_FIELD: &str = "answer_file";

fn answer_not_found() -> AppError {
    AppError::NotFound("Answer not found".to_string())
}

fn into_params(mut body: JsonOrMultipart<AnswerWriteDto>) -> AnswerParams {
    let upload = body.take_file(ANSWER_FILE_FIELD).map(|file| AnswerUpload {
        file_name: file.file_name,
        bytes: file.bytes,
    });

    AnswerParams::from_dto(body.data, upload)
}

#[utoipa::path(
    get,
    path = "/submission/{submission}/answer",
    tag = ANSWER_TAG,
    params(("submission" = i32, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Answers in the submission", body = Vec<AnswerDto>),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_answers(
    State(state): State<AppState>,
    Path(submission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let answers = AnswerService::new(&state.db, &state.file_store)
        .get_all(submission_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(answers.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Answer a question in a submission.
///
/// Send JSON for text answers. File answers use multipart form data with the file in
/// the `answer_file` part.
///
/// # Returns
/// - `201 Created` - Created answer
/// - `400 Bad Request` - Payload doesn't fit the question type, the question is on
///   another form, or the question already has an answer
/// - `404 Not Found` - Submission doesn't exist
#[utoipa::path(
    post,
    path = "/submission/{submission}/answer",
    tag = ANSWER_TAG,
    params(("submission" = i32, Path, description = "Submission ID")),
    request_body(
        content = AnswerWriteDto,
        content_type = "multipart/form-data"
    ),
    responses(
        (status = 201, description = "Created answer", body = AnswerDto),
        (status = 400, description = "Invalid answer", body = ValidationErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_answer(
    State(state): State<AppState>,
    Path(submission_id): Path<i32>,
    body: JsonOrMultipart<AnswerWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let answer = AnswerService::new(&state.db, &state.file_store)
        .create(submission_id, into_params(body))
        .await?;

    Ok((StatusCode::CREATED, Json(answer.into_dto())))
}

#[utoipa::path(
    get,
    path = "/submission/{submission}/answer/{answer}",
    tag = ANSWER_TAG,
    params(
        ("submission" = i32, Path, description = "Submission ID"),
        ("answer" = i32, Path, description = "Answer ID")
    ),
    responses(
        (status = 200, description = "Answer", body = AnswerDto),
        (status = 404, description = "Answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_answer(
    State(state): State<AppState>,
    Path((submission_id, answer_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let answer = AnswerService::new(&state.db, &state.file_store)
        .get_by_id(submission_id, answer_id)
        .await?
        .ok_or_else(answer_not_found)?;

    Ok((StatusCode::OK, Json(answer.into_dto())))
}

/// Replace an answer. Without a new upload the stored file is kept.
#[utoipa::path(
    put,
    path = "/submission/{submission}/answer/{answer}",
    tag = ANSWER_TAG,
    params(
        ("submission" = i32, Path, description = "Submission ID"),
        ("answer" = i32, Path, description = "Answer ID")
    ),
    request_body(
        content = AnswerWriteDto,
        content_type = "multipart/form-data"
    ),
    responses(
        (status = 200, description = "Updated answer", body = AnswerDto),
        (status = 400, description = "Invalid answer", body = ValidationErrorDto),
        (status = 404, description = "Answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_answer(
    State(state): State<AppState>,
    Path((submission_id, answer_id)): Path<(i32, i32)>,
    body: JsonOrMultipart<AnswerWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let answer = AnswerService::new(&state.db, &state.file_store)
        .update(submission_id, answer_id, into_params(body))
        .await?
        .ok_or_else(answer_not_found)?;

    Ok((StatusCode::OK, Json(answer.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/submission/{submission}/answer/{answer}",
    tag = ANSWER_TAG,
    params(
        ("submission" = i32, Path, description = "Submission ID"),
        ("answer" = i32, Path, description = "Answer ID")
    ),
    responses(
        (status = 204, description = "Answer deleted"),
        (status = 404, description = "Answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_answer(
    State(state): State<AppState>,
    Path((submission_id, answer_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    if !AnswerService::new(&state.db, &state.file_store)
        .delete(submission_id, answer_id)
        .await?
    {
        return Err(answer_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
