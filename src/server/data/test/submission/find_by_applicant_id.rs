use super::*;

/// Tests looking up the submission held by an applicant.
///
/// Expected: Ok(Some) for the applicant with a submission, Ok(None) otherwise
#[tokio::test]
async fn finds_submission_of_applicant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (club, _, applicant, submission) =
        factory::helpers::create_submission_with_dependencies(db).await?;
    let without = factory::create_applicant(db, club.id).await?;

    let repo = SubmissionRepository::new(db);

    let found = repo.find_by_applicant_id(applicant.id).await?.unwrap();
    assert_eq!(found.id, submission.id);
    assert!(repo.find_by_applicant_id(without.id).await?.is_none());

    Ok(())
}

/// Tests creating a submission with an explicit status.
///
/// Expected: status stored by name
#[tokio::test]
async fn create_stores_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (club, form) = factory::helpers::create_club_with_form(db).await?;
    let applicant = factory::create_applicant(db, club.id).await?;

    let submission = SubmissionRepository::new(db)
        .create(form.id, applicant.id, SubmissionStatus::Submitted)
        .await?;

    assert_eq!(submission.status, "Submitted");

    Ok(())
}
