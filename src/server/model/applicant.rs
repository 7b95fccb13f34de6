//! Applicant domain model, review pipeline and list ordering.

use crate::{
    model::applicant::{ApplicantDto, ApplicantStage, ApplicantWriteDto, Year},
    server::{
        error::{
            internal::InternalError,
            validation::{check_text, ValidationError},
        },
        model::submission::Submission,
    },
};

pub const APPLICANT_NAME_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Applicant {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub year: Year,
    pub stage: ApplicantStage,
    pub club_id: i32,
    pub application_id: Option<i32>,
    pub submission: Option<Submission>,
}

impl Applicant {
    /// Converts an entity model, parsing the stored year code and stage.
    ///
    /// # Arguments
    /// - `entity` - Applicant row
    /// - `submission` - The applicant's submission with answers, if one exists
    ///
    /// # Returns
    /// - `Ok(Applicant)` - Converted domain model
    /// - `Err(InternalError::InvalidStoredValue)` - Year or stage column holds an unknown value
    pub fn from_entity(
        entity: entity::applicant::Model,
        submission: Option<Submission>,
    ) -> Result<Self, InternalError> {
        let year = Year::from_code(entity.year as i64).ok_or_else(|| {
            InternalError::InvalidStoredValue {
                column: "applicant.year",
                value: entity.year.to_string(),
            }
        })?;
        let stage =
            ApplicantStage::parse(&entity.stage).ok_or_else(|| InternalError::InvalidStoredValue {
                column: "applicant.stage",
                value: entity.stage.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            year,
            stage,
            club_id: entity.club_id,
            application_id: entity.application_id,
            submission,
        })
    }

    pub fn into_dto(self) -> ApplicantDto {
        let (pass_apps, pass_first, pass_second) = pass_flags(self.stage);

        ApplicantDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            year: self.year,
            stage: self.stage,
            pass_apps,
            pass_first,
            pass_second,
            club_association: self.club_id,
            application_id: self.application_id,
            submission: self.submission.map(Submission::into_dto),
        }
    }
}

/// Legacy pass flags derived from a stage: (apps, first round, second round).
pub fn pass_flags(stage: ApplicantStage) -> (bool, bool, bool) {
    match stage {
        ApplicantStage::Applied | ApplicantStage::Rejected => (false, false, false),
        ApplicantStage::PassedScreening => (true, false, false),
        ApplicantStage::PassedFirstRound => (true, true, false),
        ApplicantStage::PassedSecondRound => (true, true, true),
    }
}

/// Returns whether an applicant may move from `from` to `to`.
///
/// Each stage advances one step or rejects. `PassedSecondRound` and `Rejected` are final.
pub fn can_transition(from: ApplicantStage, to: ApplicantStage) -> bool {
    use ApplicantStage::*;

    matches!(
        (from, to),
        (Applied, PassedScreening)
            | (PassedScreening, PassedFirstRound)
            | (PassedFirstRound, PassedSecondRound)
            | (Applied | PassedScreening | PassedFirstRound, Rejected)
    )
}

/// Writable applicant fields. Stage is never taken from this payload.
#[derive(Debug, Clone)]
pub struct ApplicantParams {
    pub first_name: String,
    pub last_name: String,
    pub year: Year,
    pub club_id: i32,
    pub application_id: Option<i32>,
}

impl ApplicantParams {
    /// Builds params from a write payload.
    ///
    /// `path` carries the club and form of nested routes and overrides the body values.
    ///
    /// # Returns
    /// - `Ok(ApplicantParams)` - Params with a resolved club
    /// - `Err(ValidationError)` - No club was given in the body or the path
    pub fn from_dto(
        dto: ApplicantWriteDto,
        path: Option<(i32, i32)>,
    ) -> Result<Self, ValidationError> {
        let (club_id, application_id) = match path {
            Some((club_id, form_id)) => (Some(club_id), Some(form_id)),
            None => (dto.club_association, dto.application),
        };

        let Some(club_id) = club_id else {
            return Err(ValidationError::field(
                "club_association",
                "This field is required.",
            ));
        };

        Ok(Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            year: dto.year,
            club_id,
            application_id,
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut err = ValidationError::new();
        check_text(&mut err, "first_name", &self.first_name, APPLICANT_NAME_MAX_LEN);
        check_text(&mut err, "last_name", &self.last_name, APPLICANT_NAME_MAX_LEN);
        err.into_result()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicantOrderField {
    FirstName,
    LastName,
    Year,
}

/// Sort order for applicant listings, parsed from `?ordering=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicantOrdering {
    pub field: ApplicantOrderField,
    pub descending: bool,
}

impl Default for ApplicantOrdering {
    fn default() -> Self {
        Self {
            field: ApplicantOrderField::FirstName,
            descending: false,
        }
    }
}

impl ApplicantOrdering {
    /// Parses `first_name`, `last_name` or `year` with an optional `-` prefix.
    ///
    /// Missing or unknown values fall back to first name ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Self::default();
        };

        let (descending, name) = match raw.strip_prefix('-') {
            Some(name) => (true, name),
            None => (false, raw),
        };

        let field = match name {
            "first_name" => ApplicantOrderField::FirstName,
            "last_name" => ApplicantOrderField::LastName,
            "year" => ApplicantOrderField::Year,
            _ => return Self::default(),
        };

        Self { field, descending }
    }
}

/// Path filters applied on top of scope for nested applicant routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicantFilter {
    pub club_id: Option<i32>,
    pub form_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ApplicantStage::*;

    #[test]
    fn stages_advance_one_step_at_a_time() {
        assert!(can_transition(Applied, PassedScreening));
        assert!(can_transition(PassedScreening, PassedFirstRound));
        assert!(can_transition(PassedFirstRound, PassedSecondRound));

        assert!(!can_transition(Applied, PassedFirstRound));
        assert!(!can_transition(Applied, PassedSecondRound));
        assert!(!can_transition(PassedFirstRound, PassedScreening));
    }

    #[test]
    fn any_open_stage_can_be_rejected() {
        assert!(can_transition(Applied, Rejected));
        assert!(can_transition(PassedScreening, Rejected));
        assert!(can_transition(PassedFirstRound, Rejected));
    }

    #[test]
    fn final_stages_do_not_move() {
        for to in [Applied, PassedScreening, PassedFirstRound, PassedSecondRound, Rejected] {
            assert!(!can_transition(PassedSecondRound, to));
            assert!(!can_transition(Rejected, to));
        }
    }

    #[test]
    fn pass_flags_are_monotonic() {
        assert_eq!(pass_flags(Applied), (false, false, false));
        assert_eq!(pass_flags(PassedScreening), (true, false, false));
        assert_eq!(pass_flags(PassedFirstRound), (true, true, false));
        assert_eq!(pass_flags(PassedSecondRound), (true, true, true));
        assert_eq!(pass_flags(Rejected), (false, false, false));
    }

    #[test]
    fn parses_ordering() {
        assert_eq!(ApplicantOrdering::parse(None), ApplicantOrdering::default());
        assert_eq!(
            ApplicantOrdering::parse(Some("-year")),
            ApplicantOrdering {
                field: ApplicantOrderField::Year,
                descending: true
            }
        );
        assert_eq!(
            ApplicantOrdering::parse(Some("last_name")),
            ApplicantOrdering {
                field: ApplicantOrderField::LastName,
                descending: false
            }
        );
    }

    #[test]
    fn unknown_ordering_falls_back_to_first_name() {
        assert_eq!(
            ApplicantOrdering::parse(Some("pass_apps")),
            ApplicantOrdering::default()
        );
        assert_eq!(ApplicantOrdering::parse(Some("-")), ApplicantOrdering::default());
    }

    #[test]
    fn path_overrides_body_club_and_form() {
        let dto = ApplicantWriteDto {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            year: Year::Junior,
            club_association: Some(9),
            application: Some(9),
        };

        let params = ApplicantParams::from_dto(dto, Some((1, 2))).unwrap();

        assert_eq!(params.club_id, 1);
        assert_eq!(params.application_id, Some(2));
    }

    #[test]
    fn flat_create_requires_club() {
        let dto = ApplicantWriteDto {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            year: Year::Junior,
            club_association: None,
            application: None,
        };

        let err = ApplicantParams::from_dto(dto, None).unwrap_err();

        assert!(err.messages("club_association").is_some());
    }
}
