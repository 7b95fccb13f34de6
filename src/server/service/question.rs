use sea_orm::DatabaseConnection;

use crate::server::{
    data::{form::ApplicationFormRepository, question::QuestionRepository},
    error::AppError,
    model::{
        form::{CreateQuestionParams, Question, UpdateQuestionParams},
        scope::Scope,
    },
    service::form::{require_manager, ApplicationFormService},
};

/// Question management. Every change touches the owning form's `updated_at`.
pub struct QuestionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a form's questions. Returns `None` if the form is not visible to `scope`.
    pub async fn get_all(
        &self,
        scope: &Scope,
        club_id: i32,
        form_id: i32,
    ) -> Result<Option<Vec<Question>>, AppError> {
        let form = ApplicationFormService::new(self.db)
            .get_by_id(scope, club_id, form_id)
            .await?;

        Ok(form.map(|f| f.questions))
    }

    pub async fn get_by_id(
        &self,
        scope: &Scope,
        club_id: i32,
        form_id: i32,
        id: i32,
    ) -> Result<Option<Question>, AppError> {
        let questions = self.get_all(scope, club_id, form_id).await?;

        Ok(questions.and_then(|qs| qs.into_iter().find(|q| q.id == id)))
    }

    /// Adds a question to a form in the caller's club.
    ///
    /// # Returns
    /// - `Ok(Question)` - Created question
    /// - `Err(AppError::AuthErr)` - Caller is anonymous or belongs to another club
    /// - `Err(AppError::NotFound)` - Form doesn't exist in that club
    /// - `Err(AppError::Validation)` - Invalid prompt
    pub async fn create(
        &self,
        scope: &Scope,
        club_id: i32,
        params: CreateQuestionParams,
    ) -> Result<Question, AppError> {
        require_manager(scope, club_id)?;

        if ApplicationFormService::new(self.db)
            .find_in_club(club_id, params.form_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Application form not found".to_string()));
        }
        params.validate()?;

        let form_id = params.form_id;
        let question = QuestionRepository::new(self.db).create(params).await?;
        ApplicationFormRepository::new(self.db).touch(form_id).await?;

        Ok(Question::from_entity(question)?)
    }

    /// Replaces a question's fields. Returns `None` if it is outside the caller's club.
    pub async fn update(
        &self,
        scope: &Scope,
        club_id: i32,
        form_id: i32,
        params: UpdateQuestionParams,
    ) -> Result<Option<Question>, AppError> {
        if !scope.manages(club_id) || self.find(club_id, form_id, params.id).await?.is_none() {
            return Ok(None);
        }
        params.validate()?;

        let question = QuestionRepository::new(self.db).update(params).await?;
        ApplicationFormRepository::new(self.db).touch(form_id).await?;

        Ok(Some(Question::from_entity(question)?))
    }

    /// Removes a question. Returns false if it is outside the caller's club.
    pub async fn delete(
        &self,
        scope: &Scope,
        club_id: i32,
        form_id: i32,
        id: i32,
    ) -> Result<bool, AppError> {
        if !scope.manages(club_id) || self.find(club_id, form_id, id).await?.is_none() {
            return Ok(false);
        }

        let deleted = QuestionRepository::new(self.db).delete(id).await?;
        if deleted {
            ApplicationFormRepository::new(self.db).touch(form_id).await?;
        }

        Ok(deleted)
    }

    async fn find(&self, club_id: i32, form_id: i32, id: i32) -> Result<Option<Question>, AppError> {
        let form = ApplicationFormService::new(self.db)
            .find_in_club(club_id, form_id)
            .await?;

        Ok(form.and_then(|f| f.questions.into_iter().find(|q| q.id == id)))
    }
}
