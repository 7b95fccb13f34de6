use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::{
    model::submission::SubmissionStatus,
    server::{
        data::{
            answer::AnswerRepository, applicant::ApplicantRepository,
            form::ApplicationFormRepository, question::QuestionRepository,
            submission::SubmissionRepository,
        },
        error::{
            validation::{ValidationError, NON_FIELD_ERRORS},
            AppError,
        },
        model::submission::{can_change_status, Submission, SubmissionParams},
        service::storage::AnswerFileStore,
    },
};

pub struct SubmissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every submission with its answers.
    pub async fn get_all(&self) -> Result<Vec<Submission>, AppError> {
        let submissions = SubmissionRepository::new(self.db).get_all().await?;

        self.with_answers(submissions).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Submission>, AppError> {
        let Some(submission) = SubmissionRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.with_answers(vec![submission]).await?.pop())
    }

    /// Gets the submissions of the given applicants keyed by applicant id.
    pub async fn get_by_applicant_ids(
        &self,
        applicant_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Submission>, AppError> {
        let submissions = SubmissionRepository::new(self.db)
            .get_by_applicant_ids(applicant_ids)
            .await?;

        Ok(self
            .with_answers(submissions)
            .await?
            .into_iter()
            .map(|s| (s.applicant_id, s))
            .collect())
    }

    /// Starts a submission for an applicant. Open to anonymous callers.
    ///
    /// # Returns
    /// - `Ok(Submission)` - Created submission, `Draft` unless another status was requested
    /// - `Err(AppError::Validation)` - Unknown form or applicant, or `Submitted` requested
    ///   while required questions are unanswered
    /// - `Err(AppError::Conflict)` - The applicant already has a submission
    pub async fn create(&self, params: SubmissionParams) -> Result<Submission, AppError> {
        self.validate_references(&params).await?;
        self.check_unique(&params, None).await?;

        let status = params.status.unwrap_or_default();
        if status == SubmissionStatus::Submitted {
            self.check_required_answers(params.form_id, None).await?;
        }

        let submission = SubmissionRepository::new(self.db)
            .create(params.form_id, params.applicant_id, status)
            .await?;

        tracing::info!(
            "Applicant {} started submission {} for form {}",
            submission.applicant_id,
            submission.id,
            submission.form_id
        );

        Ok(Submission::from_entity(submission, Vec::new())?)
    }

    /// Replaces a submission's form, applicant and status.
    ///
    /// Status may only stay the same or move from `Draft` to `Submitted`.
    ///
    /// # Returns
    /// - `Ok(None)` - Submission doesn't exist
    /// - `Err(AppError::Validation)` - Backwards status change, a form change while answers
    ///   exist, unknown references, or missing required answers when submitting
    /// - `Err(AppError::Conflict)` - Another submission already exists for the applicant
    pub async fn update(
        &self,
        id: i32,
        params: SubmissionParams,
    ) -> Result<Option<Submission>, AppError> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let status = params.status.unwrap_or(existing.status);
        if !can_change_status(existing.status, status) {
            return Err(ValidationError::field(
                "status",
                "A submitted application cannot return to draft.",
            )
            .into());
        }

        // Answers point at questions of the current form.
        if params.form_id != existing.form_id && !existing.answers.is_empty() {
            return Err(ValidationError::field(
                "form",
                "A submission with answers cannot move to another form.",
            )
            .into());
        }

        self.validate_references(&params).await?;
        self.check_unique(&params, Some(id)).await?;

        if status == SubmissionStatus::Submitted && existing.status == SubmissionStatus::Draft {
            self.check_required_answers(params.form_id, Some(id)).await?;
        }

        SubmissionRepository::new(self.db)
            .update(id, params.form_id, params.applicant_id, status)
            .await?;

        self.get_by_id(id).await
    }

    /// Moves a draft submission to `Submitted`.
    pub async fn submit(&self, id: i32) -> Result<Option<Submission>, AppError> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        self.update(
            id,
            SubmissionParams {
                form_id: existing.form_id,
                applicant_id: existing.applicant_id,
                status: Some(SubmissionStatus::Submitted),
            },
        )
        .await
    }

    /// Deletes a submission, its answers, and any files stored for them.
    pub async fn delete(&self, file_store: &AnswerFileStore, id: i32) -> Result<bool, AppError> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(false);
        };

        let deleted = SubmissionRepository::new(self.db).delete(id).await?;

        for path in existing.answers.iter().filter_map(|a| a.answer_file.as_deref()) {
            if let Err(e) = file_store.delete(path).await {
                tracing::warn!(
                    "Failed to remove answer file {} of submission {}: {}",
                    path,
                    id,
                    e
                );
            }
        }

        Ok(deleted)
    }

    async fn with_answers(
        &self,
        submissions: Vec<entity::application_submission::Model>,
    ) -> Result<Vec<Submission>, AppError> {
        let submission_ids = submissions.iter().map(|s| s.id).collect();
        let mut answers_by_submission: HashMap<i32, Vec<_>> = HashMap::new();
        for answer in AnswerRepository::new(self.db)
            .get_by_submission_ids(submission_ids)
            .await?
        {
            answers_by_submission
                .entry(answer.submission_id)
                .or_default()
                .push(answer);
        }

        submissions
            .into_iter()
            .map(|submission| {
                let answers = answers_by_submission
                    .remove(&submission.id)
                    .unwrap_or_default();
                Submission::from_entity(submission, answers).map_err(Into::into)
            })
            .collect()
    }

    async fn validate_references(&self, params: &SubmissionParams) -> Result<(), AppError> {
        let mut err = ValidationError::new();

        if ApplicationFormRepository::new(self.db)
            .get_by_id(params.form_id)
            .await?
            .is_none()
        {
            err.add(
                "form",
                format!("Invalid pk \"{}\" - object does not exist.", params.form_id),
            );
        }

        if ApplicantRepository::new(self.db)
            .get_by_id(params.applicant_id)
            .await?
            .is_none()
        {
            err.add(
                "applicant",
                format!(
                    "Invalid pk \"{}\" - object does not exist.",
                    params.applicant_id
                ),
            );
        }

        Ok(err.into_result()?)
    }

    /// An applicant holds at most one submission, which also makes (form, applicant) unique.
    async fn check_unique(
        &self,
        params: &SubmissionParams,
        current_id: Option<i32>,
    ) -> Result<(), AppError> {
        let existing = SubmissionRepository::new(self.db)
            .find_by_applicant_id(params.applicant_id)
            .await?;

        match existing {
            Some(other) if Some(other.id) != current_id => {
                let err = if other.form_id == params.form_id {
                    ValidationError::field(
                        NON_FIELD_ERRORS,
                        "The fields form, applicant must make a unique set.",
                    )
                } else {
                    ValidationError::field("applicant", "This applicant already has a submission.")
                };
                Err(AppError::Conflict(err))
            }
            _ => Ok(()),
        }
    }

    /// Fails if any required question on the form has no answer in the submission.
    async fn check_required_answers(
        &self,
        form_id: i32,
        submission_id: Option<i32>,
    ) -> Result<(), AppError> {
        let answered: HashSet<i32> = match submission_id {
            Some(id) => AnswerRepository::new(self.db)
                .get_by_submission_ids(vec![id])
                .await?
                .into_iter()
                .map(|a| a.question_id)
                .collect(),
            None => HashSet::new(),
        };

        let missing: Vec<String> = QuestionRepository::new(self.db)
            .get_by_form_id(form_id)
            .await?
            .into_iter()
            .filter(|q| q.required && !answered.contains(&q.id))
            .map(|q| q.id.to_string())
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        Err(ValidationError::field(
            "answers",
            format!("Missing answers for required questions: {}.", missing.join(", ")),
        )
        .into())
    }
}
