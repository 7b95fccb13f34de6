use sea_orm::DatabaseConnection;

use crate::{
    model::applicant::ApplicantStage,
    server::{
        data::{
            applicant::ApplicantRepository, club::ClubRepository, form::ApplicationFormRepository,
        },
        error::{internal::InternalError, validation::ValidationError, AppError},
        model::{
            applicant::{
                can_transition, Applicant, ApplicantFilter, ApplicantOrdering, ApplicantParams,
            },
            scope::Scope,
        },
        service::{form::require_manager, submission::SubmissionService},
    },
};

pub struct ApplicantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists applicants visible to `scope`, narrowed by `filter` and sorted by `ordering`.
    ///
    /// Each applicant carries their submission, if any, with its answers.
    pub async fn get_all(
        &self,
        scope: &Scope,
        filter: ApplicantFilter,
        ordering: ApplicantOrdering,
    ) -> Result<Vec<Applicant>, AppError> {
        let repo = ApplicantRepository::new(self.db);

        let applicants = repo.get_all(scope.applicants(), filter, ordering).await?;

        let applicant_ids = applicants.iter().map(|a| a.id).collect();
        let mut submissions = SubmissionService::new(self.db)
            .get_by_applicant_ids(applicant_ids)
            .await?;

        applicants
            .into_iter()
            .map(|applicant| {
                let submission = submissions.remove(&applicant.id);
                Applicant::from_entity(applicant, submission).map_err(Into::into)
            })
            .collect()
    }

    /// Gets an applicant visible to `scope` that matches `filter`.
    pub async fn get_by_id(
        &self,
        scope: &Scope,
        filter: ApplicantFilter,
        id: i32,
    ) -> Result<Option<Applicant>, AppError> {
        let Some(applicant) = self.find(filter, id).await? else {
            return Ok(None);
        };
        if !scope.applicants().allows(applicant.club_id) {
            return Ok(None);
        }

        self.load(applicant).await.map(Some)
    }

    /// Creates an applicant at the `Applied` stage. Open to anonymous callers.
    ///
    /// # Returns
    /// - `Ok(Applicant)` - Created applicant
    /// - `Err(AppError::Validation)` - Invalid names, unknown club, or a form that doesn't
    ///   exist or belongs to another club
    pub async fn create(&self, params: ApplicantParams) -> Result<Applicant, AppError> {
        self.validate(&params).await?;

        let applicant = ApplicantRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created applicant {} for club {}",
            applicant.id,
            applicant.club_id
        );

        Ok(Applicant::from_entity(applicant, None)?)
    }

    /// Replaces an applicant's writable fields. Stage is unchanged.
    ///
    /// Returns `None` if the applicant doesn't match `filter` or is not in the caller's club.
    pub async fn update(
        &self,
        scope: &Scope,
        filter: ApplicantFilter,
        id: i32,
        params: ApplicantParams,
    ) -> Result<Option<Applicant>, AppError> {
        let Some(existing) = self.find(filter, id).await? else {
            return Ok(None);
        };
        if !scope.manages(existing.club_id) {
            return Ok(None);
        }
        require_manager(scope, params.club_id)?;
        self.validate(&params).await?;

        let applicant = ApplicantRepository::new(self.db).update(id, params).await?;

        self.load(applicant).await.map(Some)
    }

    /// Deletes an applicant in the caller's club along with their submission.
    pub async fn delete(
        &self,
        scope: &Scope,
        filter: ApplicantFilter,
        id: i32,
    ) -> Result<bool, AppError> {
        let Some(existing) = self.find(filter, id).await? else {
            return Ok(false);
        };
        if !scope.manages(existing.club_id) {
            return Ok(false);
        }

        let deleted = ApplicantRepository::new(self.db).delete(id).await?;
        if deleted {
            tracing::info!("Deleted applicant {}", id);
        }

        Ok(deleted)
    }

    /// Moves an applicant in the caller's club to `stage`.
    ///
    /// # Returns
    /// - `Ok(Some(Applicant))` - Stage changed
    /// - `Ok(None)` - Applicant doesn't exist or is not in the caller's club
    /// - `Err(AppError::Validation)` - The transition is not allowed from the current stage
    pub async fn change_stage(
        &self,
        scope: &Scope,
        id: i32,
        stage: ApplicantStage,
    ) -> Result<Option<Applicant>, AppError> {
        let repo = ApplicantRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };
        if !scope.manages(existing.club_id) {
            return Ok(None);
        }

        let current = ApplicantStage::parse(&existing.stage).ok_or_else(|| {
            InternalError::InvalidStoredValue {
                column: "applicant.stage",
                value: existing.stage.clone(),
            }
        })?;
        if !can_transition(current, stage) {
            return Err(ValidationError::field(
                "stage",
                format!(
                    "Cannot move applicant from {} to {}.",
                    current.as_str(),
                    stage.as_str()
                ),
            )
            .into());
        }

        let applicant = repo.set_stage(id, stage).await?;

        tracing::info!(
            "Applicant {} moved from {} to {}",
            id,
            current.as_str(),
            stage.as_str()
        );

        self.load(applicant).await.map(Some)
    }

    async fn find(
        &self,
        filter: ApplicantFilter,
        id: i32,
    ) -> Result<Option<entity::applicant::Model>, AppError> {
        let applicant = ApplicantRepository::new(self.db).get_by_id(id).await?;

        Ok(applicant.filter(|a| {
            filter.club_id.map_or(true, |club_id| a.club_id == club_id)
                && filter
                    .form_id
                    .map_or(true, |form_id| a.application_id == Some(form_id))
        }))
    }

    async fn load(&self, applicant: entity::applicant::Model) -> Result<Applicant, AppError> {
        let submission = SubmissionService::new(self.db)
            .get_by_applicant_ids(vec![applicant.id])
            .await?
            .remove(&applicant.id);

        Ok(Applicant::from_entity(applicant, submission)?)
    }

    async fn validate(&self, params: &ApplicantParams) -> Result<(), AppError> {
        let mut err = match params.validate() {
            Ok(()) => ValidationError::new(),
            Err(err) => err,
        };

        if !ClubRepository::new(self.db).exists(params.club_id).await? {
            err.add(
                "club_association",
                format!("Invalid pk \"{}\" - object does not exist.", params.club_id),
            );
        }

        if let Some(form_id) = params.application_id {
            match ApplicationFormRepository::new(self.db).get_by_id(form_id).await? {
                None => err.add(
                    "application",
                    format!("Invalid pk \"{}\" - object does not exist.", form_id),
                ),
                Some(form) if form.club_id != params.club_id => err.add(
                    "application",
                    "Application form belongs to a different club.",
                ),
                Some(_) => {}
            }
        }

        Ok(err.into_result()?)
    }
}
