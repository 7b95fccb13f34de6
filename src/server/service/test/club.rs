use super::member_scope;
use crate::server::{
    error::{auth::AuthError, AppError},
    model::{club::ClubParams, scope::Scope},
    service::{club::ClubService, user::UserService},
};
use test_utils::{builder::TestBuilder, factory};

/// Tests club listing for each kind of caller.
///
/// Verifies anonymous callers see every club, members only their own, and members
/// without a club see nothing.
///
/// Expected: 2, 1 and 0 clubs respectively
#[tokio::test]
async fn lists_clubs_by_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mine = factory::create_club(db).await?;
    factory::create_club(db).await?;
    let user = factory::create_member(db, mine.id).await?;

    let service = ClubService::new(db);

    assert_eq!(service.get_all(&Scope::Anonymous).await?.len(), 2);

    let own = service.get_all(&member_scope(&user, Some(mine.id))).await?;
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].id, mine.id);

    assert!(service.get_all(&member_scope(&user, None)).await?.is_empty());

    Ok(())
}

/// Tests that anonymous callers cannot create clubs.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn create_requires_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClubService::new(db)
        .create(
            &Scope::Anonymous,
            ClubParams {
                name: "Robotics".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests club creation by a member without a club.
///
/// Verifies the creator's profile is pointed at the new club so a freshly loaded scope
/// can see and rename it.
///
/// Expected: profile club is the new club, which is listed and renamable
#[tokio::test]
async fn creator_without_club_joins_new_club() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = ClubService::new(db);
    let club = service
        .create(
            &member_scope(&user, None),
            ClubParams {
                name: "Robotics".to_string(),
            },
        )
        .await?;

    let reloaded = UserService::new(db).get_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.club_id, Some(club.id));

    let scope = Scope::Member(reloaded);
    let visible = service.get_all(&scope).await?;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, club.id);

    let renamed = service
        .update(
            &scope,
            club.id,
            ClubParams {
                name: "Robotics Society".to_string(),
            },
        )
        .await?;
    assert_eq!(renamed.map(|c| c.name), Some("Robotics Society".to_string()));

    Ok(())
}

/// Tests club creation by a member who already belongs to a club.
///
/// Expected: the creator's profile still points at their original club
#[tokio::test]
async fn creator_with_club_keeps_affiliation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mine = factory::create_club(db).await?;
    let user = factory::create_member(db, mine.id).await?;

    let club = ClubService::new(db)
        .create(
            &member_scope(&user, Some(mine.id)),
            ClubParams {
                name: "Chess".to_string(),
            },
        )
        .await?;

    let reloaded = UserService::new(db).get_by_id(user.id).await?.unwrap();
    assert_ne!(club.id, mine.id);
    assert_eq!(reloaded.club_id, Some(mine.id));

    Ok(())
}

/// Tests renaming a club the caller doesn't belong to.
///
/// Expected: Ok(None) and the club keeps its name
#[tokio::test]
async fn update_outside_scope_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mine = factory::create_club(db).await?;
    let other = factory::create_club(db).await?;
    let user = factory::create_member(db, mine.id).await?;

    let service = ClubService::new(db);
    let result = service
        .update(
            &member_scope(&user, Some(mine.id)),
            other.id,
            ClubParams {
                name: "Taken Over".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());
    let unchanged = service.get_by_id(&Scope::Anonymous, other.id).await?.unwrap();
    assert_eq!(unchanged.name, other.name);

    Ok(())
}

/// Tests that an overlong club name is rejected.
///
/// Expected: Err(AppError::Validation) on "name"
#[tokio::test]
async fn update_rejects_long_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await?;
    let user = factory::create_member(db, club.id).await?;

    let result = ClubService::new(db)
        .update(
            &member_scope(&user, Some(club.id)),
            club.id,
            ClubParams {
                name: "x".repeat(101),
            },
        )
        .await;

    match result {
        Err(AppError::Validation(err)) => assert!(err.messages("name").is_some()),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}
