use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{scope::Scope, user::User},
};

/// Resolves the caller behind a request's session.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Scope for endpoints that anonymous callers may also use.
    ///
    /// A session pointing at a deleted user is treated as anonymous.
    pub async fn scope(&self) -> Result<Scope, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(Scope::Anonymous);
        };

        match self.load(user_id).await? {
            Some(user) => Ok(Scope::Member(user)),
            None => {
                tracing::debug!("Session references missing user {}", user_id);
                Ok(Scope::Anonymous)
            }
        }
    }

    /// Requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user with their club
    /// - `Err(AuthError::UserNotInSession)` - No user in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        self.load(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }

    /// Requires a logged-in user and returns them as a member scope.
    pub async fn require_scope(&self) -> Result<Scope, AppError> {
        self.require().await.map(Scope::Member)
    }

    async fn load(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db)
            .find_with_profile(user_id)
            .await?;

        Ok(user.map(|(user, profile)| User::from_entity(user, profile)))
    }
}
