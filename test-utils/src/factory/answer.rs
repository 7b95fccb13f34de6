use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for answers. Defaults to the text `"Answer"` and no file.
pub struct AnswerFactory<'a> {
    db: &'a DatabaseConnection,
    submission_id: i32,
    question_id: i32,
    answer_text: Option<String>,
    answer_file: Option<String>,
}

impl<'a> AnswerFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, submission_id: i32, question_id: i32) -> Self {
        Self {
            db,
            submission_id,
            question_id,
            answer_text: Some("Answer".to_string()),
            answer_file: None,
        }
    }

    pub fn answer_text(mut self, answer_text: Option<String>) -> Self {
        self.answer_text = answer_text;
        self
    }

    /// Path relative to the media root, e.g. `answers/cv.pdf`.
    pub fn answer_file(mut self, answer_file: Option<String>) -> Self {
        self.answer_file = answer_file;
        self
    }

    pub async fn build(self) -> Result<entity::application_answer::Model, DbErr> {
        entity::application_answer::ActiveModel {
            submission_id: ActiveValue::Set(self.submission_id),
            question_id: ActiveValue::Set(self.question_id),
            answer_text: ActiveValue::Set(self.answer_text),
            answer_file: ActiveValue::Set(self.answer_file),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_answer(
    db: &DatabaseConnection,
    submission_id: i32,
    question_id: i32,
) -> Result<entity::application_answer::Model, DbErr> {
    AnswerFactory::new(db, submission_id, question_id)
        .build()
        .await
}
