use super::*;

/// Tests creating an applicant.
///
/// Verifies the year is stored as its code and the stage starts at `Applied`.
///
/// Expected: Ok(Model) with year 3 and stage "Applied"
#[tokio::test]
async fn starts_at_applied_stage() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (club, form) = factory::helpers::create_club_with_form(db).await?;

    let applicant = ApplicantRepository::new(db)
        .create(ApplicantParams {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            year: Year::Junior,
            club_id: club.id,
            application_id: Some(form.id),
        })
        .await?;

    assert_eq!(applicant.year, 3);
    assert_eq!(applicant.stage, ApplicantStage::Applied.as_str());
    assert_eq!(applicant.application_id, Some(form.id));

    Ok(())
}
