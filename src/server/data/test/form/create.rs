use super::*;

/// Tests creating a form.
///
/// Verifies both timestamps are set to the same creation time.
///
/// Expected: Ok(Model) with created_at == updated_at
#[tokio::test]
async fn sets_both_timestamps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await?;

    let form = ApplicationFormRepository::new(db)
        .create(CreateApplicationFormParams {
            club_id: club.id,
            title: "Fall Recruitment".to_string(),
        })
        .await?;

    assert_eq!(form.club_id, club.id);
    assert_eq!(form.title, "Fall Recruitment");
    assert_eq!(form.created_at, form.updated_at);

    Ok(())
}

/// Tests retitling a form.
///
/// Expected: Ok(Model) with new title, created_at unchanged and updated_at advanced
#[tokio::test]
async fn update_keeps_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await?;
    let earlier = Utc::now() - Duration::hours(1);
    let form = factory::form::FormFactory::new(db, club.id)
        .updated_at(earlier)
        .build()
        .await?;

    let updated = ApplicationFormRepository::new(db)
        .update(UpdateApplicationFormParams {
            id: form.id,
            title: "Spring Recruitment".to_string(),
        })
        .await?;

    assert_eq!(updated.title, "Spring Recruitment");
    assert_eq!(updated.created_at, form.created_at);
    assert!(updated.updated_at > earlier);

    Ok(())
}
