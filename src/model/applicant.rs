use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::model::submission::SubmissionDto;

/// Class year. Serialized by name, accepted by name or by its numeric code.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, ToSchema)]
pub enum Year {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

impl Year {
    pub fn code(self) -> i16 {
        match self {
            Self::Freshman => 1,
            Self::Sophomore => 2,
            Self::Junior => 3,
            Self::Senior => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Freshman),
            2 => Some(Self::Sophomore),
            3 => Some(Self::Junior),
            4 => Some(Self::Senior),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Freshman" => Some(Self::Freshman),
            "Sophomore" => Some(Self::Sophomore),
            "Junior" => Some(Self::Junior),
            "Senior" => Some(Self::Senior),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(i64),
            Text(String),
        }

        let year = match Raw::deserialize(deserializer)? {
            Raw::Code(code) => Year::from_code(code),
            Raw::Text(text) => {
                let text = text.trim();
                match text.parse::<i64>() {
                    Ok(code) => Year::from_code(code),
                    Err(_) => Year::from_name(text),
                }
            }
        };

        year.ok_or_else(|| D::Error::custom("year must be Freshman, Sophomore, Junior or Senior"))
    }
}

/// Position of an applicant in the review pipeline.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ToSchema)]
pub enum ApplicantStage {
    #[default]
    Applied,
    PassedScreening,
    PassedFirstRound,
    PassedSecondRound,
    Rejected,
}

impl ApplicantStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::PassedScreening => "PassedScreening",
            Self::PassedFirstRound => "PassedFirstRound",
            Self::PassedSecondRound => "PassedSecondRound",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Applied" => Some(Self::Applied),
            "PassedScreening" => Some(Self::PassedScreening),
            "PassedFirstRound" => Some(Self::PassedFirstRound),
            "PassedSecondRound" => Some(Self::PassedSecondRound),
            "Rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ApplicantDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub year: Year,
    pub stage: ApplicantStage,
    /// Passed the application screening.
    pub pass_apps: bool,
    /// Passed the first interview round.
    pub pass_first: bool,
    /// Passed the second interview round.
    pub pass_second: bool,
    pub club_association: i32,
    pub application_id: Option<i32>,
    pub submission: Option<SubmissionDto>,
}

/// Applicant body. On nested routes the club and form come from the path instead.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ApplicantWriteDto {
    pub first_name: String,
    pub last_name: String,
    pub year: Year,
    #[serde(default)]
    pub club_association: Option<i32>,
    #[serde(default)]
    pub application: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct StageChangeDto {
    pub stage: ApplicantStage,
}
