use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, form::ApplicationFormRepository, question::QuestionRepository},
    error::{auth::AuthError, AppError},
    model::{
        form::{ApplicationForm, CreateApplicationFormParams, UpdateApplicationFormParams},
        scope::Scope,
    },
};

pub struct ApplicationFormService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationFormService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the forms of `club_id` visible to `scope`, each with its questions.
    pub async fn get_all(
        &self,
        scope: &Scope,
        club_id: i32,
    ) -> Result<Vec<ApplicationForm>, AppError> {
        let form_repo = ApplicationFormRepository::new(self.db);
        let question_repo = QuestionRepository::new(self.db);

        let forms = form_repo.get_all(scope.forms().within(club_id)).await?;

        let form_ids = forms.iter().map(|f| f.id).collect();
        let mut questions_by_form: HashMap<i32, Vec<_>> = HashMap::new();
        for question in question_repo.get_by_form_ids(form_ids).await? {
            questions_by_form
                .entry(question.form_id)
                .or_default()
                .push(question);
        }

        forms
            .into_iter()
            .map(|form| {
                let questions = questions_by_form.remove(&form.id).unwrap_or_default();
                ApplicationForm::from_entity(form, questions).map_err(Into::into)
            })
            .collect()
    }

    /// Gets a form of `club_id` if it is visible to `scope`.
    pub async fn get_by_id(
        &self,
        scope: &Scope,
        club_id: i32,
        id: i32,
    ) -> Result<Option<ApplicationForm>, AppError> {
        if !scope.forms().within(club_id).allows(club_id) {
            return Ok(None);
        }

        self.find_in_club(club_id, id).await
    }

    /// Creates a form in the caller's club.
    ///
    /// # Returns
    /// - `Ok(ApplicationForm)` - Created form with no questions
    /// - `Err(AppError::AuthErr)` - Caller is anonymous or belongs to another club
    /// - `Err(AppError::NotFound)` - Club doesn't exist
    /// - `Err(AppError::Validation)` - Invalid title
    pub async fn create(
        &self,
        scope: &Scope,
        params: CreateApplicationFormParams,
    ) -> Result<ApplicationForm, AppError> {
        require_manager(scope, params.club_id)?;

        if !ClubRepository::new(self.db).exists(params.club_id).await? {
            return Err(AppError::NotFound("Club not found".to_string()));
        }
        params.validate()?;

        let form = ApplicationFormRepository::new(self.db)
            .create(params)
            .await?;

        tracing::info!("Created application form {} for club {}", form.id, form.club_id);

        Ok(ApplicationForm::from_entity(form, Vec::new())?)
    }

    /// Retitles a form in the caller's club.
    ///
    /// Returns `None` if the form doesn't exist, belongs to another club, or the caller
    /// doesn't manage `club_id`.
    pub async fn update(
        &self,
        scope: &Scope,
        club_id: i32,
        params: UpdateApplicationFormParams,
    ) -> Result<Option<ApplicationForm>, AppError> {
        if !scope.manages(club_id) || self.find_in_club(club_id, params.id).await?.is_none() {
            return Ok(None);
        }
        params.validate()?;

        let id = params.id;
        ApplicationFormRepository::new(self.db)
            .update(params)
            .await?;

        self.find_in_club(club_id, id).await
    }

    /// Deletes a form in the caller's club along with its questions and submissions.
    pub async fn delete(&self, scope: &Scope, club_id: i32, id: i32) -> Result<bool, AppError> {
        if !scope.manages(club_id) || self.find_in_club(club_id, id).await?.is_none() {
            return Ok(false);
        }

        let deleted = ApplicationFormRepository::new(self.db).delete(id).await?;
        if deleted {
            tracing::info!("Deleted application form {} of club {}", id, club_id);
        }

        Ok(deleted)
    }

    /// Loads a form with its questions if it belongs to `club_id`, ignoring scope.
    pub async fn find_in_club(
        &self,
        club_id: i32,
        id: i32,
    ) -> Result<Option<ApplicationForm>, AppError> {
        let Some(form) = ApplicationFormRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };
        if form.club_id != club_id {
            return Ok(None);
        }

        let questions = QuestionRepository::new(self.db).get_by_form_id(id).await?;

        Ok(Some(ApplicationForm::from_entity(form, questions)?))
    }
}

/// Fails unless the caller is logged in and belongs to `club_id`.
pub(crate) fn require_manager(scope: &Scope, club_id: i32) -> Result<(), AppError> {
    let Some(user) = scope.user() else {
        return Err(AuthError::UserNotInSession.into());
    };

    if !scope.manages(club_id) {
        return Err(AuthError::AccessDenied(
            user.id,
            format!("User attempted to modify club {} without membership", club_id),
        )
        .into());
    }

    Ok(())
}
