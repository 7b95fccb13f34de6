use super::*;

/// Tests writing a new stage.
///
/// Expected: stage stored by name, other fields untouched
#[tokio::test]
async fn stores_stage_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await?;
    let applicant = factory::create_applicant(db, club.id).await?;

    let updated = ApplicantRepository::new(db)
        .set_stage(applicant.id, ApplicantStage::PassedScreening)
        .await?;

    assert_eq!(updated.stage, ApplicantStage::PassedScreening.as_str());
    assert_eq!(updated.first_name, applicant.first_name);
    assert_eq!(updated.club_id, applicant.club_id);

    Ok(())
}

/// Tests that updating writable fields leaves the stage alone.
///
/// Expected: stage still "PassedScreening" after update
#[tokio::test]
async fn update_keeps_stage() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await?;
    let applicant = factory::applicant::ApplicantFactory::new(db, club.id)
        .stage(ApplicantStage::PassedScreening.as_str())
        .build()
        .await?;

    let updated = ApplicantRepository::new(db)
        .update(
            applicant.id,
            ApplicantParams {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                year: Year::Senior,
                club_id: club.id,
                application_id: None,
            },
        )
        .await?;

    assert_eq!(updated.first_name, "Grace");
    assert_eq!(updated.year, 4);
    assert_eq!(updated.stage, ApplicantStage::PassedScreening.as_str());

    Ok(())
}
