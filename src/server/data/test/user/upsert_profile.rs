use super::*;

/// Tests that a new user gets exactly one profile.
///
/// Expected: profile created on first call and reused on the second
#[tokio::test]
async fn creates_then_updates_single_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .create("organizer".to_string(), None, "hash".to_string())
        .await?;

    let created = repo.upsert_profile(user.id, None).await?;
    let updated = repo.upsert_profile(user.id, Some(club.id)).await?;

    assert_eq!(created.id, updated.id);
    assert_eq!(updated.club_id, Some(club.id));

    let (_, profile) = repo.find_with_profile(user.id).await?.unwrap();
    assert_eq!(profile.unwrap().club_id, Some(club.id));

    Ok(())
}
