use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::applicant::ApplicantStage,
    server::model::{
        applicant::{ApplicantFilter, ApplicantOrderField, ApplicantOrdering, ApplicantParams},
        scope::Visibility,
    },
};

pub struct ApplicantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an applicant at the `Applied` stage.
    pub async fn create(&self, params: ApplicantParams) -> Result<entity::applicant::Model, DbErr> {
        entity::applicant::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            year: ActiveValue::Set(params.year.code()),
            stage: ActiveValue::Set(ApplicantStage::Applied.as_str().to_string()),
            club_id: ActiveValue::Set(params.club_id),
            application_id: ActiveValue::Set(params.application_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::applicant::Model>, DbErr> {
        entity::prelude::Applicant::find_by_id(id).one(self.db).await
    }

    /// Gets applicants allowed by `visibility` and `filter`, sorted by `ordering`.
    ///
    /// Ties are broken by id so the order is stable.
    pub async fn get_all(
        &self,
        visibility: Visibility,
        filter: ApplicantFilter,
        ordering: ApplicantOrdering,
    ) -> Result<Vec<entity::applicant::Model>, DbErr> {
        let mut query = entity::prelude::Applicant::find();

        match visibility {
            Visibility::All => {}
            Visibility::Club(club_id) => {
                query = query.filter(entity::applicant::Column::ClubId.eq(club_id));
            }
            Visibility::Nothing => return Ok(Vec::new()),
        }

        if let Some(club_id) = filter.club_id {
            query = query.filter(entity::applicant::Column::ClubId.eq(club_id));
        }
        if let Some(form_id) = filter.form_id {
            query = query.filter(entity::applicant::Column::ApplicationId.eq(form_id));
        }

        let column = match ordering.field {
            ApplicantOrderField::FirstName => entity::applicant::Column::FirstName,
            ApplicantOrderField::LastName => entity::applicant::Column::LastName,
            ApplicantOrderField::Year => entity::applicant::Column::Year,
        };

        query = if ordering.descending {
            query.order_by_desc(column)
        } else {
            query.order_by_asc(column)
        };

        query
            .order_by_asc(entity::applicant::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the writable fields of an applicant. Stage is left untouched.
    pub async fn update(
        &self,
        id: i32,
        params: ApplicantParams,
    ) -> Result<entity::applicant::Model, DbErr> {
        entity::applicant::ActiveModel {
            id: ActiveValue::Unchanged(id),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            year: ActiveValue::Set(params.year.code()),
            club_id: ActiveValue::Set(params.club_id),
            application_id: ActiveValue::Set(params.application_id),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    pub async fn set_stage(
        &self,
        id: i32,
        stage: ApplicantStage,
    ) -> Result<entity::applicant::Model, DbErr> {
        entity::applicant::ActiveModel {
            id: ActiveValue::Unchanged(id),
            stage: ActiveValue::Set(stage.as_str().to_string()),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Deletes an applicant. Their submission cascades.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Applicant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
