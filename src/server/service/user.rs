//! Registration, login, and user listing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{club::ClubRepository, user::UserRepository},
    error::{auth::AuthError, internal::InternalError, validation::ValidationError, AppError},
    model::user::{LoginParams, RegisterParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user and their profile in one transaction.
    ///
    /// # Returns
    /// - `Ok(User)` - Registered user with the profile's club
    /// - `Err(AppError::Validation)` - Bad field values or unknown club
    /// - `Err(AppError::Conflict)` - Username already taken
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let mut err = match params.validate() {
            Ok(()) => ValidationError::new(),
            Err(err) => err,
        };
        if let Some(club_id) = params.club_id {
            if !ClubRepository::new(self.db).exists(club_id).await? {
                err.add(
                    "club",
                    format!("Invalid pk \"{}\" - object does not exist.", club_id),
                );
            }
        }
        err.into_result()?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_username(&params.username).await?.is_some() {
            return Err(username_taken());
        }

        let password_hash = hash_password(&params.password)?;

        let txn = self.db.begin().await?;
        let user = UserRepository::new(&txn)
            .create(params.username, params.email, password_hash)
            .await
            .map_err(username_conflict)?;
        let profile = UserRepository::new(&txn)
            .upsert_profile(user.id, params.club_id)
            .await?;
        txn.commit().await?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(User::from_entity(user, Some(profile)))
    }

    /// Checks a username and password pair.
    ///
    /// Unknown usernames and wrong passwords fail the same way.
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_username(&params.username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.get_by_id(user.id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user.id).into())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_with_profile(id).await?;

        Ok(user.map(|(user, profile)| User::from_entity(user, profile)))
    }

    /// Lists the members of `user`'s club, or only `user` when they have no club.
    pub async fn list_for(&self, user: &User) -> Result<Vec<User>, AppError> {
        let Some(club_id) = user.club_id else {
            return Ok(vec![user.clone()]);
        };

        let members = UserRepository::new(self.db).get_by_club_id(club_id).await?;

        Ok(members
            .into_iter()
            .map(|(user, profile)| User::from_entity(user, profile))
            .collect())
    }
}

fn username_taken() -> AppError {
    AppError::Conflict(ValidationError::field(
        "username",
        "A user with that username already exists.",
    ))
}

/// A concurrent registration can pass the lookup and still hit the unique index.
fn username_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => username_taken(),
        _ => err.into(),
    }
}

fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

fn verify_password(password: &str, stored: &str) -> Result<bool, InternalError> {
    let parsed = PasswordHash::new(stored).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("correct horse").unwrap();

        assert_ne!(hash, "correct horse");
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_internal_error() {
        assert!(verify_password("anything", "not-a-hash").is_err());
    }

    /// Tests the error raised when the username index rejects an insert.
    ///
    /// Expected: AppError::Conflict on "username"
    #[tokio::test]
    async fn unique_violation_is_a_username_conflict() -> Result<(), AppError> {
        let test = test_utils::builder::TestBuilder::new()
            .with_user_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let taken = test_utils::factory::create_user(db).await?;

        let err = UserRepository::new(db)
            .create(taken.username.clone(), None, "hash".to_string())
            .await
            .unwrap_err();

        match username_conflict(err) {
            AppError::Conflict(err) => assert!(err.messages("username").is_some()),
            other => panic!("expected conflict, got {:?}", other),
        }

        Ok(())
    }

    #[test]
    fn other_database_errors_pass_through() {
        let err = username_conflict(DbErr::Custom("boom".to_string()));

        assert!(matches!(err, AppError::DbErr(_)));
    }
}
