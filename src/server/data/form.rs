use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    form::{CreateApplicationFormParams, UpdateApplicationFormParams},
    scope::Visibility,
};

pub struct ApplicationFormRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationFormRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateApplicationFormParams,
    ) -> Result<entity::application_form::Model, DbErr> {
        let now = Utc::now();

        entity::application_form::ActiveModel {
            club_id: ActiveValue::Set(params.club_id),
            title: ActiveValue::Set(params.title),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::application_form::Model>, DbErr> {
        entity::prelude::ApplicationForm::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets the forms allowed by `visibility`, ordered by id.
    pub async fn get_all(
        &self,
        visibility: Visibility,
    ) -> Result<Vec<entity::application_form::Model>, DbErr> {
        let mut query = entity::prelude::ApplicationForm::find()
            .order_by_asc(entity::application_form::Column::Id);

        match visibility {
            Visibility::All => {}
            Visibility::Club(club_id) => {
                query = query.filter(entity::application_form::Column::ClubId.eq(club_id));
            }
            Visibility::Nothing => return Ok(Vec::new()),
        }

        query.all(self.db).await
    }

    pub async fn update(
        &self,
        params: UpdateApplicationFormParams,
    ) -> Result<entity::application_form::Model, DbErr> {
        entity::application_form::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            title: ActiveValue::Set(params.title),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Sets `updated_at` to now. Called whenever the form's question set changes.
    pub async fn touch(&self, id: i32) -> Result<(), DbErr> {
        entity::application_form::ActiveModel {
            id: ActiveValue::Unchanged(id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a form. Questions and submissions cascade; applicants lose their link.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ApplicationForm::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
