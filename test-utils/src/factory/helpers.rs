//! Shared helpers for factories.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Next value of a process-wide counter used to keep factory defaults unique.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a club with one application form.
pub async fn create_club_with_form(
    db: &DatabaseConnection,
) -> Result<(entity::club::Model, entity::application_form::Model), DbErr> {
    let club = crate::factory::club::create_club(db).await?;
    let form = crate::factory::form::create_form(db, club.id).await?;

    Ok((club, form))
}

/// Creates a club, a form in it, an applicant for the form, and a draft submission.
pub async fn create_submission_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::club::Model,
        entity::application_form::Model,
        entity::applicant::Model,
        entity::application_submission::Model,
    ),
    DbErr,
> {
    let (club, form) = create_club_with_form(db).await?;
    let applicant = crate::factory::applicant::ApplicantFactory::new(db, club.id)
        .application_id(Some(form.id))
        .build()
        .await?;
    let submission =
        crate::factory::submission::create_submission(db, form.id, applicant.id).await?;

    Ok((club, form, applicant, submission))
}
