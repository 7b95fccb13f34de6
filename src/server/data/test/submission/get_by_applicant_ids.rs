use super::*;

/// Tests batch lookup of submissions.
///
/// Expected: only submissions of the requested applicants
#[tokio::test]
async fn returns_requested_applicants_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (club, form, applicant, submission) =
        factory::helpers::create_submission_with_dependencies(db).await?;
    let other = factory::create_applicant(db, club.id).await?;
    factory::create_submission(db, form.id, other.id).await?;

    let submissions = SubmissionRepository::new(db)
        .get_by_applicant_ids(vec![applicant.id])
        .await?;

    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].id, submission.id);

    Ok(())
}

/// Tests batch lookup with no ids.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn empty_ids_return_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::create_submission_with_dependencies(db).await?;

    let submissions = SubmissionRepository::new(db)
        .get_by_applicant_ids(Vec::new())
        .await?;

    assert!(submissions.is_empty());

    Ok(())
}
