use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ToSchema)]
pub enum SubmissionStatus {
    #[default]
    Draft,
    Submitted,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Draft" => Some(Self::Draft),
            "Submitted" => Some(Self::Submitted),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AnswerDto {
    pub id: i32,
    pub submission: i32,
    pub question: i32,
    pub answer_text: Option<String>,
    /// Storage path relative to the media root, e.g. `answers/<name>`.
    pub answer_file: Option<String>,
}

/// Answer body. Files travel as a multipart part named `answer_file`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AnswerWriteDto {
    pub question: i32,
    #[serde(default)]
    pub answer_text: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SubmissionDto {
    pub id: i32,
    pub form: i32,
    pub applicant: i32,
    pub status: SubmissionStatus,
    pub answers: Vec<AnswerDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SubmissionWriteDto {
    pub form: i32,
    pub applicant: i32,
    #[serde(default)]
    pub status: Option<SubmissionStatus>,
}
