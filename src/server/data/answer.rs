use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Stored answer values after validation and file storage.
#[derive(Debug, Clone)]
pub struct AnswerRecord {
    pub question_id: i32,
    pub answer_text: Option<String>,
    pub answer_file: Option<String>,
}

pub struct AnswerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnswerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        submission_id: i32,
        record: AnswerRecord,
    ) -> Result<entity::application_answer::Model, DbErr> {
        entity::application_answer::ActiveModel {
            submission_id: ActiveValue::Set(submission_id),
            question_id: ActiveValue::Set(record.question_id),
            answer_text: ActiveValue::Set(record.answer_text),
            answer_file: ActiveValue::Set(record.answer_file),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::application_answer::Model>, DbErr> {
        entity::prelude::ApplicationAnswer::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_submission_and_question(
        &self,
        submission_id: i32,
        question_id: i32,
    ) -> Result<Option<entity::application_answer::Model>, DbErr> {
        entity::prelude::ApplicationAnswer::find()
            .filter(entity::application_answer::Column::SubmissionId.eq(submission_id))
            .filter(entity::application_answer::Column::QuestionId.eq(question_id))
            .one(self.db)
            .await
    }

    /// Gets the answers of several submissions in one query, ordered by id.
    pub async fn get_by_submission_ids(
        &self,
        submission_ids: Vec<i32>,
    ) -> Result<Vec<entity::application_answer::Model>, DbErr> {
        if submission_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ApplicationAnswer::find()
            .filter(entity::application_answer::Column::SubmissionId.is_in(submission_ids))
            .order_by_asc(entity::application_answer::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        record: AnswerRecord,
    ) -> Result<entity::application_answer::Model, DbErr> {
        entity::application_answer::ActiveModel {
            id: ActiveValue::Unchanged(id),
            question_id: ActiveValue::Set(record.question_id),
            answer_text: ActiveValue::Set(record.answer_text),
            answer_file: ActiveValue::Set(record.answer_file),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ApplicationAnswer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
