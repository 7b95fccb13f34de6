//! Application form and question domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::form::{
        ApplicationFormDto, ApplicationFormWriteDto, QuestionDto, QuestionType, QuestionWriteDto,
    },
    server::error::{
        internal::InternalError,
        validation::{check_text, ValidationError},
    },
};

pub const FORM_TITLE_MAX_LEN: usize = 100;
pub const QUESTION_PROMPT_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i32,
    pub form_id: i32,
    pub prompt: String,
    pub question_type: QuestionType,
    pub required: bool,
}

impl Question {
    /// Converts an entity model, parsing the stored question type.
    ///
    /// # Returns
    /// - `Ok(Question)` - Converted domain model
    /// - `Err(InternalError::InvalidStoredValue)` - Stored type is not a known variant
    pub fn from_entity(entity: entity::application_question::Model) -> Result<Self, InternalError> {
        let question_type = QuestionType::parse(&entity.question_type).ok_or_else(|| {
            InternalError::InvalidStoredValue {
                column: "application_question.question_type",
                value: entity.question_type.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            form_id: entity.form_id,
            prompt: entity.prompt,
            question_type,
            required: entity.required,
        })
    }

    pub fn into_dto(self) -> QuestionDto {
        QuestionDto {
            id: self.id,
            form: self.form_id,
            prompt: self.prompt,
            question_type: self.question_type,
            required: self.required,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationForm {
    pub id: i32,
    pub club_id: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Ordered by id.
    pub questions: Vec<Question>,
}

impl ApplicationForm {
    /// Builds a form from its entity and the entities of its questions.
    ///
    /// Questions are sorted by id so callers may pass them in any order.
    pub fn from_entity(
        entity: entity::application_form::Model,
        questions: Vec<entity::application_question::Model>,
    ) -> Result<Self, InternalError> {
        let mut questions = questions
            .into_iter()
            .map(Question::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        questions.sort_by_key(|q| q.id);

        Ok(Self {
            id: entity.id,
            club_id: entity.club_id,
            title: entity.title,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            questions,
        })
    }

    pub fn into_dto(self) -> ApplicationFormDto {
        ApplicationFormDto {
            id: self.id,
            club: self.club_id,
            title: self.title,
            created_at: self.created_at,
            updated_at: self.updated_at,
            questions: self.questions.into_iter().map(Question::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateApplicationFormParams {
    pub club_id: i32,
    pub title: String,
}

impl CreateApplicationFormParams {
    pub fn from_dto(club_id: i32, dto: ApplicationFormWriteDto) -> Self {
        Self {
            club_id,
            title: dto.title.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateApplicationFormParams {
    pub id: i32,
    pub title: String,
}

impl UpdateApplicationFormParams {
    pub fn from_dto(id: i32, dto: ApplicationFormWriteDto) -> Self {
        Self {
            id,
            title: dto.title.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    let mut err = ValidationError::new();
    check_text(&mut err, "title", title, FORM_TITLE_MAX_LEN);
    err.into_result()
}

#[derive(Debug, Clone)]
pub struct CreateQuestionParams {
    pub form_id: i32,
    pub prompt: String,
    pub question_type: QuestionType,
    pub required: bool,
}

impl CreateQuestionParams {
    pub fn from_dto(form_id: i32, dto: QuestionWriteDto) -> Self {
        Self {
            form_id,
            prompt: dto.prompt.trim().to_string(),
            question_type: dto.question_type,
            required: dto.required,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_prompt(&self.prompt)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateQuestionParams {
    pub id: i32,
    pub prompt: String,
    pub question_type: QuestionType,
    pub required: bool,
}

impl UpdateQuestionParams {
    pub fn from_dto(id: i32, dto: QuestionWriteDto) -> Self {
        Self {
            id,
            prompt: dto.prompt.trim().to_string(),
            question_type: dto.question_type,
            required: dto.required,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_prompt(&self.prompt)
    }
}

fn validate_prompt(prompt: &str) -> Result<(), ValidationError> {
    let mut err = ValidationError::new();
    check_text(&mut err, "prompt", prompt, QUESTION_PROMPT_MAX_LEN);
    err.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn question_entity(id: i32, question_type: &str) -> entity::application_question::Model {
        entity::application_question::Model {
            id,
            form_id: 1,
            question_type: question_type.to_string(),
            prompt: format!("Question {}", id),
            required: true,
        }
    }

    #[test]
    fn orders_questions_by_id() {
        let now = Utc::now();
        let form = ApplicationForm::from_entity(
            entity::application_form::Model {
                id: 1,
                club_id: 1,
                title: "Fall".to_string(),
                created_at: now,
                updated_at: now,
            },
            vec![question_entity(3, "Long"), question_entity(1, "Short")],
        )
        .unwrap();

        let ids: Vec<i32> = form.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn rejects_unknown_stored_question_type() {
        let result = Question::from_entity(question_entity(1, "Essay"));

        assert!(matches!(
            result,
            Err(InternalError::InvalidStoredValue { .. })
        ));
    }

    #[test]
    fn parses_multi_select() {
        let question = Question::from_entity(question_entity(1, "Multi-Select")).unwrap();

        assert_eq!(question.question_type, QuestionType::MultiSelect);
    }

    #[test]
    fn rejects_blank_and_long_titles() {
        let blank = CreateApplicationFormParams {
            club_id: 1,
            title: String::new(),
        };
        let long = CreateApplicationFormParams {
            club_id: 1,
            title: "t".repeat(FORM_TITLE_MAX_LEN + 1),
        };

        assert!(blank.validate().is_err());
        assert!(long.validate().is_err());
    }
}
