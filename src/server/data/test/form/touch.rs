use super::*;

/// Tests bumping a form's modification time.
///
/// Expected: updated_at moves forward, title and created_at unchanged
#[tokio::test]
async fn advances_updated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await?;
    let earlier = Utc::now() - Duration::days(1);
    let form = factory::form::FormFactory::new(db, club.id)
        .updated_at(earlier)
        .build()
        .await?;

    let repo = ApplicationFormRepository::new(db);
    repo.touch(form.id).await?;

    let touched = repo.get_by_id(form.id).await?.unwrap();
    assert!(touched.updated_at > earlier);
    assert_eq!(touched.created_at, form.created_at);
    assert_eq!(touched.title, form.title);

    Ok(())
}
