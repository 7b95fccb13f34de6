use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for applicants.
///
/// Defaults: `"First{n}"`/`"Last{n}"`, year 1 (Freshman), stage `"Applied"`, no form.
pub struct ApplicantFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    first_name: String,
    last_name: String,
    year: i16,
    stage: String,
    application_id: Option<i32>,
}

impl<'a> ApplicantFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, club_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            club_id,
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            year: 1,
            stage: "Applied".to_string(),
            application_id: None,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Class year code, 1 through 4.
    pub fn year(mut self, year: i16) -> Self {
        self.year = year;
        self
    }

    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = stage.into();
        self
    }

    pub fn application_id(mut self, application_id: Option<i32>) -> Self {
        self.application_id = application_id;
        self
    }

    pub async fn build(self) -> Result<entity::applicant::Model, DbErr> {
        entity::applicant::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            year: ActiveValue::Set(self.year),
            stage: ActiveValue::Set(self.stage),
            club_id: ActiveValue::Set(self.club_id),
            application_id: ActiveValue::Set(self.application_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_applicant(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::applicant::Model, DbErr> {
    ApplicantFactory::new(db, club_id).build().await
}
