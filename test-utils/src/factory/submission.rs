use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for submissions. Status defaults to `"Draft"`.
pub struct SubmissionFactory<'a> {
    db: &'a DatabaseConnection,
    form_id: i32,
    applicant_id: i32,
    status: String,
}

impl<'a> SubmissionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, form_id: i32, applicant_id: i32) -> Self {
        Self {
            db,
            form_id,
            applicant_id,
            status: "Draft".to_string(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::application_submission::Model, DbErr> {
        entity::application_submission::ActiveModel {
            form_id: ActiveValue::Set(self.form_id),
            applicant_id: ActiveValue::Set(self.applicant_id),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_submission(
    db: &DatabaseConnection,
    form_id: i32,
    applicant_id: i32,
) -> Result<entity::application_submission::Model, DbErr> {
    SubmissionFactory::new(db, form_id, applicant_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_submission_with_dependencies};

    #[tokio::test]
    async fn creates_draft_submission_for_form_applicant() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_club_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (club, form, applicant, submission) = create_submission_with_dependencies(db).await?;

        assert_eq!(applicant.club_id, club.id);
        assert_eq!(applicant.application_id, Some(form.id));
        assert_eq!(submission.form_id, form.id);
        assert_eq!(submission.applicant_id, applicant.id);
        assert_eq!(submission.status, "Draft");

        Ok(())
    }
}
