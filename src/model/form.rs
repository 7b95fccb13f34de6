use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of answer a question expects.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub enum QuestionType {
    Short,
    Long,
    #[serde(rename = "Multi-Select")]
    MultiSelect,
    File,
}

impl QuestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Long => "Long",
            Self::MultiSelect => "Multi-Select",
            Self::File => "File",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Short" => Some(Self::Short),
            "Long" => Some(Self::Long),
            "Multi-Select" => Some(Self::MultiSelect),
            "File" => Some(Self::File),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub form: i32,
    pub prompt: String,
    pub question_type: QuestionType,
    pub required: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct QuestionWriteDto {
    pub prompt: String,
    pub question_type: QuestionType,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

/// An application form with its questions ordered by id.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ApplicationFormDto {
    pub id: i32,
    pub club: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub questions: Vec<QuestionDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ApplicationFormWriteDto {
    pub title: String,
}
