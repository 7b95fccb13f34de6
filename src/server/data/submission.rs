use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::submission::SubmissionStatus;

pub struct SubmissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        form_id: i32,
        applicant_id: i32,
        status: SubmissionStatus,
    ) -> Result<entity::application_submission::Model, DbErr> {
        entity::application_submission::ActiveModel {
            form_id: ActiveValue::Set(form_id),
            applicant_id: ActiveValue::Set(applicant_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::application_submission::Model>, DbErr> {
        entity::prelude::ApplicationSubmission::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::application_submission::Model>, DbErr> {
        entity::prelude::ApplicationSubmission::find()
            .order_by_asc(entity::application_submission::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the submission of an applicant. Each applicant has at most one.
    pub async fn find_by_applicant_id(
        &self,
        applicant_id: i32,
    ) -> Result<Option<entity::application_submission::Model>, DbErr> {
        entity::prelude::ApplicationSubmission::find()
            .filter(entity::application_submission::Column::ApplicantId.eq(applicant_id))
            .one(self.db)
            .await
    }

    /// Gets the submissions of several applicants in one query.
    pub async fn get_by_applicant_ids(
        &self,
        applicant_ids: Vec<i32>,
    ) -> Result<Vec<entity::application_submission::Model>, DbErr> {
        if applicant_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ApplicationSubmission::find()
            .filter(entity::application_submission::Column::ApplicantId.is_in(applicant_ids))
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        form_id: i32,
        applicant_id: i32,
        status: SubmissionStatus,
    ) -> Result<entity::application_submission::Model, DbErr> {
        entity::application_submission::ActiveModel {
            id: ActiveValue::Unchanged(id),
            form_id: ActiveValue::Set(form_id),
            applicant_id: ActiveValue::Set(applicant_id),
            status: ActiveValue::Set(status.as_str().to_string()),
        }
        .update(self.db)
        .await
    }

    /// Deletes a submission. Its answers cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ApplicationSubmission::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
