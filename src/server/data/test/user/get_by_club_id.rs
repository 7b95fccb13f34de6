use super::*;

/// Tests listing a club's members.
///
/// Expected: only users whose profile points at the club, ordered by id
#[tokio::test]
async fn lists_members_of_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await?;
    let other = factory::create_club(db).await?;
    let first = factory::create_member(db, club.id).await?;
    let second = factory::create_member(db, club.id).await?;
    factory::create_member(db, other.id).await?;
    factory::create_user(db).await?;

    let members = UserRepository::new(db).get_by_club_id(club.id).await?;

    let ids: Vec<_> = members.iter().map(|(u, _)| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests finding a user by username.
///
/// Expected: Ok(Some) for an existing username, Ok(None) otherwise
#[tokio::test]
async fn finds_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_username("alice").await?.unwrap().id, user.id);
    assert!(repo.find_by_username("bob").await?.is_none());

    Ok(())
}
