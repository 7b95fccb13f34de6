use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for form questions.
///
/// Defaults: prompt `"Question {n}"`, type `"Short"`, required.
pub struct QuestionFactory<'a> {
    db: &'a DatabaseConnection,
    form_id: i32,
    prompt: String,
    question_type: String,
    required: bool,
}

impl<'a> QuestionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, form_id: i32) -> Self {
        Self {
            db,
            form_id,
            prompt: format!("Question {}", next_id()),
            question_type: "Short".to_string(),
            required: true,
        }
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Stored type name: `Short`, `Long`, `Multi-Select` or `File`.
    pub fn question_type(mut self, question_type: impl Into<String>) -> Self {
        self.question_type = question_type.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub async fn build(self) -> Result<entity::application_question::Model, DbErr> {
        entity::application_question::ActiveModel {
            form_id: ActiveValue::Set(self.form_id),
            prompt: ActiveValue::Set(self.prompt),
            question_type: ActiveValue::Set(self.question_type),
            required: ActiveValue::Set(self.required),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_question(
    db: &DatabaseConnection,
    form_id: i32,
) -> Result<entity::application_question::Model, DbErr> {
    QuestionFactory::new(db, form_id).build().await
}
