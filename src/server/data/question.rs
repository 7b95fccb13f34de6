use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::form::{CreateQuestionParams, UpdateQuestionParams};

pub struct QuestionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateQuestionParams,
    ) -> Result<entity::application_question::Model, DbErr> {
        entity::application_question::ActiveModel {
            form_id: ActiveValue::Set(params.form_id),
            question_type: ActiveValue::Set(params.question_type.as_str().to_string()),
            prompt: ActiveValue::Set(params.prompt),
            required: ActiveValue::Set(params.required),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::application_question::Model>, DbErr> {
        entity::prelude::ApplicationQuestion::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets a form's questions ordered by id.
    pub async fn get_by_form_id(
        &self,
        form_id: i32,
    ) -> Result<Vec<entity::application_question::Model>, DbErr> {
        self.get_by_form_ids(vec![form_id]).await
    }

    /// Gets the questions of several forms in one query, ordered by id.
    pub async fn get_by_form_ids(
        &self,
        form_ids: Vec<i32>,
    ) -> Result<Vec<entity::application_question::Model>, DbErr> {
        if form_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ApplicationQuestion::find()
            .filter(entity::application_question::Column::FormId.is_in(form_ids))
            .order_by_asc(entity::application_question::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        params: UpdateQuestionParams,
    ) -> Result<entity::application_question::Model, DbErr> {
        entity::application_question::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            question_type: ActiveValue::Set(params.question_type.as_str().to_string()),
            prompt: ActiveValue::Set(params.prompt),
            required: ActiveValue::Set(params.required),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ApplicationQuestion::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
