pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_club_table;
mod m20260110_000002_create_user_table;
mod m20260110_000003_create_profile_table;
mod m20260110_000004_create_application_form_table;
mod m20260110_000005_create_application_question_table;
mod m20260110_000006_create_applicant_table;
mod m20260110_000007_create_application_submission_table;
mod m20260110_000008_create_application_answer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_club_table::Migration),
            Box::new(m20260110_000002_create_user_table::Migration),
            Box::new(m20260110_000003_create_profile_table::Migration),
            Box::new(m20260110_000004_create_application_form_table::Migration),
            Box::new(m20260110_000005_create_application_question_table::Migration),
            Box::new(m20260110_000006_create_applicant_table::Migration),
            Box::new(m20260110_000007_create_application_submission_table::Migration),
            Box::new(m20260110_000008_create_application_answer_table::Migration),
        ]
    }
}
