//! Submission and answer domain models, including answer payload rules.

use thiserror::Error;

use crate::{
    model::{
        form::QuestionType,
        submission::{AnswerDto, AnswerWriteDto, SubmissionDto, SubmissionStatus, SubmissionWriteDto},
    },
    server::error::{internal::InternalError, validation::ValidationError},
};

/// Longest accepted answer to a `Short` question, in characters.
pub const SHORT_ANSWER_MAX_LEN: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub id: i32,
    pub submission_id: i32,
    pub question_id: i32,
    pub answer_text: Option<String>,
    pub answer_file: Option<String>,
}

impl Answer {
    pub fn from_entity(entity: entity::application_answer::Model) -> Self {
        Self {
            id: entity.id,
            submission_id: entity.submission_id,
            question_id: entity.question_id,
            answer_text: entity.answer_text,
            answer_file: entity.answer_file,
        }
    }

    pub fn into_dto(self) -> AnswerDto {
        AnswerDto {
            id: self.id,
            submission: self.submission_id,
            question: self.question_id,
            answer_text: self.answer_text,
            answer_file: self.answer_file,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: i32,
    pub form_id: i32,
    pub applicant_id: i32,
    pub status: SubmissionStatus,
    pub answers: Vec<Answer>,
}

impl Submission {
    pub fn from_entity(
        entity: entity::application_submission::Model,
        answers: Vec<entity::application_answer::Model>,
    ) -> Result<Self, InternalError> {
        let status = SubmissionStatus::parse(&entity.status).ok_or_else(|| {
            InternalError::InvalidStoredValue {
                column: "application_submission.status",
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            form_id: entity.form_id,
            applicant_id: entity.applicant_id,
            status,
            answers: answers.into_iter().map(Answer::from_entity).collect(),
        })
    }

    pub fn into_dto(self) -> SubmissionDto {
        SubmissionDto {
            id: self.id,
            form: self.form_id,
            applicant: self.applicant_id,
            status: self.status,
            answers: self.answers.into_iter().map(Answer::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionParams {
    pub form_id: i32,
    pub applicant_id: i32,
    /// `None` keeps the current status on update and means `Draft` on create.
    pub status: Option<SubmissionStatus>,
}

impl SubmissionParams {
    pub fn from_dto(dto: SubmissionWriteDto) -> Self {
        Self {
            form_id: dto.form,
            applicant_id: dto.applicant,
            status: dto.status,
        }
    }
}

/// Only `Draft -> Submitted` moves; keeping the same status is always allowed.
pub fn can_change_status(from: SubmissionStatus, to: SubmissionStatus) -> bool {
    from == to || (from == SubmissionStatus::Draft && to == SubmissionStatus::Submitted)
}

/// A file part received with an answer write.
#[derive(Debug, Clone)]
pub struct AnswerUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct AnswerParams {
    pub question_id: i32,
    pub answer_text: Option<String>,
    /// Empty uploads are dropped before they get here.
    pub upload: Option<AnswerUpload>,
}

impl AnswerParams {
    pub fn from_dto(dto: AnswerWriteDto, upload: Option<AnswerUpload>) -> Self {
        Self {
            question_id: dto.question,
            answer_text: dto.answer_text,
            upload: upload.filter(|u| !u.bytes.is_empty()),
        }
    }
}

/// Rule an answer payload broke.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerValidationError {
    #[error("Text answer required.")]
    TextRequired,
    #[error("Short answer must be <= 1000 characters.")]
    ShortTooLong,
    #[error("File answer required.")]
    FileRequired,
}

impl AnswerValidationError {
    pub fn field(self) -> &'static str {
        match self {
            Self::TextRequired | Self::ShortTooLong => "answer_text",
            Self::FileRequired => "answer_file",
        }
    }
}

impl From<AnswerValidationError> for ValidationError {
    fn from(err: AnswerValidationError) -> Self {
        ValidationError::field(err.field(), err.to_string())
    }
}

/// Checks an answer's payload against its question's type.
///
/// Rules are evaluated in order and the first failure is reported:
/// 1. `Short` needs non-empty text
/// 2. `Short` text may not exceed 1000 characters
/// 3. `File` needs a non-empty file
/// 4. Every other type needs non-empty text
pub fn validate_answer(
    question_type: QuestionType,
    answer_text: Option<&str>,
    has_file: bool,
) -> Result<(), AnswerValidationError> {
    let text = answer_text.filter(|t| !t.is_empty());

    match question_type {
        QuestionType::Short => match text {
            None => Err(AnswerValidationError::TextRequired),
            Some(t) if t.chars().count() > SHORT_ANSWER_MAX_LEN => {
                Err(AnswerValidationError::ShortTooLong)
            }
            Some(_) => Ok(()),
        },
        QuestionType::File if !has_file => Err(AnswerValidationError::FileRequired),
        QuestionType::File => Ok(()),
        QuestionType::Long | QuestionType::MultiSelect if text.is_none() => {
            Err(AnswerValidationError::TextRequired)
        }
        QuestionType::Long | QuestionType::MultiSelect => Ok(()),
    }
}
