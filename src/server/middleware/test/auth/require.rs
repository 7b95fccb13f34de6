use super::*;

/// Tests requiring a user with an empty session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests requiring a user after login.
///
/// Expected: Ok(User) matching the stored user
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::user::UserFactory::new(db)
        .username("organizer")
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session).require().await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.username, "organizer");
    assert_eq!(returned.club_id, None);

    Ok(())
}

/// Tests requiring a user whose row was deleted after login.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the session's user id
#[tokio::test]
async fn fails_when_user_was_deleted() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;

    AuthSession::new(session).set_user_id(user.id).await?;
    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    let result = AuthGuard::new(db, session).require().await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) => assert_eq!(id, user.id),
        other => panic!("expected UserNotInDatabase, got {:?}", other),
    }

    Ok(())
}

/// Tests that logging out clears the session user.
///
/// Expected: Err(AuthError::UserNotInSession) after clear
#[tokio::test]
async fn cleared_session_is_logged_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    auth_session.clear().await;

    let result = AuthGuard::new(db, session).require_scope().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
