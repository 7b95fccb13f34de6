use super::*;

/// Tests scope resolution with an empty session.
///
/// Expected: Ok(Scope::Anonymous)
#[tokio::test]
async fn empty_session_is_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let scope = AuthGuard::new(db, session).scope().await?;

    assert!(matches!(scope, Scope::Anonymous));

    Ok(())
}

/// Tests scope resolution for a logged in club member.
///
/// Verifies the member scope carries the club from the user's profile.
///
/// Expected: Ok(Scope::Member) with club_id set
#[tokio::test]
async fn logged_in_member_has_club_scope() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let club = factory::create_club(db).await?;
    let user = factory::create_member(db, club.id).await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let scope = AuthGuard::new(db, session).scope().await?;

    match scope {
        Scope::Member(member) => {
            assert_eq!(member.id, user.id);
            assert_eq!(member.club_id, Some(club.id));
        }
        Scope::Anonymous => panic!("expected member scope"),
    }

    Ok(())
}

/// Tests scope resolution when the session user was deleted.
///
/// Expected: Ok(Scope::Anonymous)
#[tokio::test]
async fn deleted_user_falls_back_to_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;

    AuthSession::new(session).set_user_id(user.id).await?;
    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    let scope = AuthGuard::new(db, session).scope().await?;

    assert!(matches!(scope, Scope::Anonymous));

    Ok(())
}
