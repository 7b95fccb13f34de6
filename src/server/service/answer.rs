use sea_orm::DatabaseConnection;

use crate::{
    model::form::QuestionType,
    server::{
        data::{
            answer::{AnswerRecord, AnswerRepository},
            question::QuestionRepository,
            submission::SubmissionRepository,
        },
        error::{
            internal::InternalError,
            validation::{ValidationError, NON_FIELD_ERRORS},
            AppError,
        },
        model::submission::{validate_answer, Answer, AnswerParams},
        service::storage::AnswerFileStore,
    },
};

/// Answers nested under a submission. Uploaded files go through `AnswerFileStore`.
pub struct AnswerService<'a> {
    db: &'a DatabaseConnection,
    file_store: &'a AnswerFileStore,
}

impl<'a> AnswerService<'a> {
    pub fn new(db: &'a DatabaseConnection, file_store: &'a AnswerFileStore) -> Self {
        Self { db, file_store }
    }

    /// Lists a submission's answers. Returns `None` if the submission doesn't exist.
    pub async fn get_all(&self, submission_id: i32) -> Result<Option<Vec<Answer>>, AppError> {
        if SubmissionRepository::new(self.db)
            .get_by_id(submission_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let answers = AnswerRepository::new(self.db)
            .get_by_submission_ids(vec![submission_id])
            .await?;

        Ok(Some(answers.into_iter().map(Answer::from_entity).collect()))
    }

    pub async fn get_by_id(
        &self,
        submission_id: i32,
        id: i32,
    ) -> Result<Option<Answer>, AppError> {
        Ok(self
            .find(submission_id, id)
            .await?
            .map(Answer::from_entity))
    }

    /// Answers a question within a submission.
    ///
    /// The payload is checked against the question type before any file is stored.
    ///
    /// # Returns
    /// - `Ok(Answer)` - Created answer
    /// - `Err(AppError::NotFound)` - Submission doesn't exist
    /// - `Err(AppError::Validation)` - Question is not on the submission's form, or the
    ///   payload breaks the question type's rules
    /// - `Err(AppError::Conflict)` - The question already has an answer in this submission
    pub async fn create(&self, submission_id: i32, params: AnswerParams) -> Result<Answer, AppError> {
        let Some(submission) = SubmissionRepository::new(self.db)
            .get_by_id(submission_id)
            .await?
        else {
            return Err(AppError::NotFound("Submission not found".to_string()));
        };

        let question_type = self
            .question_type_for(submission.form_id, params.question_id)
            .await?;
        self.check_unique(submission_id, params.question_id, None)
            .await?;
        validate_answer(
            question_type,
            params.answer_text.as_deref(),
            params.upload.is_some(),
        )
        .map_err(ValidationError::from)?;

        let answer_file = self.store_upload(&params).await?;
        let record = AnswerRecord {
            question_id: params.question_id,
            answer_text: params.answer_text,
            answer_file: answer_file.clone(),
        };

        let answer = match AnswerRepository::new(self.db)
            .create(submission_id, record)
            .await
        {
            Ok(answer) => answer,
            Err(e) => {
                self.discard(answer_file.as_deref()).await;
                return Err(e.into());
            }
        };

        Ok(Answer::from_entity(answer))
    }

    /// Replaces an answer's question and text. A new upload replaces the stored file;
    /// without one the existing file is kept.
    pub async fn update(
        &self,
        submission_id: i32,
        id: i32,
        params: AnswerParams,
    ) -> Result<Option<Answer>, AppError> {
        let Some(existing) = self.find(submission_id, id).await? else {
            return Ok(None);
        };
        let Some(submission) = SubmissionRepository::new(self.db)
            .get_by_id(submission_id)
            .await?
        else {
            return Ok(None);
        };

        let question_type = self
            .question_type_for(submission.form_id, params.question_id)
            .await?;
        self.check_unique(submission_id, params.question_id, Some(id))
            .await?;
        validate_answer(
            question_type,
            params.answer_text.as_deref(),
            params.upload.is_some() || existing.answer_file.is_some(),
        )
        .map_err(ValidationError::from)?;

        let uploaded = self.store_upload(&params).await?;
        let record = AnswerRecord {
            question_id: params.question_id,
            answer_text: params.answer_text,
            answer_file: uploaded.clone().or(existing.answer_file.clone()),
        };

        let answer = match AnswerRepository::new(self.db).update(id, record).await {
            Ok(answer) => answer,
            Err(e) => {
                self.discard(uploaded.as_deref()).await;
                return Err(e.into());
            }
        };

        if uploaded.is_some() {
            self.discard(existing.answer_file.as_deref()).await;
        }

        Ok(Some(Answer::from_entity(answer)))
    }

    /// Deletes an answer and its stored file.
    pub async fn delete(&self, submission_id: i32, id: i32) -> Result<bool, AppError> {
        let Some(existing) = self.find(submission_id, id).await? else {
            return Ok(false);
        };

        let deleted = AnswerRepository::new(self.db).delete(id).await?;
        self.discard(existing.answer_file.as_deref()).await;

        Ok(deleted)
    }

    async fn find(
        &self,
        submission_id: i32,
        id: i32,
    ) -> Result<Option<entity::application_answer::Model>, AppError> {
        let answer = AnswerRepository::new(self.db).get_by_id(id).await?;

        Ok(answer.filter(|a| a.submission_id == submission_id))
    }

    /// Resolves the type of a question that must belong to `form_id`.
    async fn question_type_for(
        &self,
        form_id: i32,
        question_id: i32,
    ) -> Result<QuestionType, AppError> {
        let question = QuestionRepository::new(self.db)
            .get_by_id(question_id)
            .await?;

        let Some(question) = question else {
            return Err(ValidationError::field(
                "question",
                format!("Invalid pk \"{}\" - object does not exist.", question_id),
            )
            .into());
        };
        if question.form_id != form_id {
            return Err(ValidationError::field(
                "question",
                "Question does not belong to this submission's form.",
            )
            .into());
        }

        QuestionType::parse(&question.question_type).ok_or_else(|| {
            InternalError::InvalidStoredValue {
                column: "application_question.question_type",
                value: question.question_type.clone(),
            }
            .into()
        })
    }

    async fn check_unique(
        &self,
        submission_id: i32,
        question_id: i32,
        current_id: Option<i32>,
    ) -> Result<(), AppError> {
        let existing = AnswerRepository::new(self.db)
            .find_by_submission_and_question(submission_id, question_id)
            .await?;

        match existing {
            Some(other) if Some(other.id) != current_id => Err(AppError::Conflict(
                ValidationError::field(
                    NON_FIELD_ERRORS,
                    "The fields submission, question must make a unique set.",
                ),
            )),
            _ => Ok(()),
        }
    }

    async fn store_upload(&self, params: &AnswerParams) -> Result<Option<String>, AppError> {
        match &params.upload {
            Some(upload) => Ok(Some(
                self.file_store
                    .save(&upload.file_name, &upload.bytes)
                    .await?,
            )),
            None => Ok(None),
        }
    }

    /// Removes a stored file, logging instead of failing once the row change is done.
    async fn discard(&self, path: Option<&str>) {
        if let Some(path) = path {
            if let Err(e) = self.file_store.delete(path).await {
                tracing::warn!("Failed to remove answer file {}: {}", path, e);
            }
        }
    }
}
