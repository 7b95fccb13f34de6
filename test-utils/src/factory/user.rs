//! User factory. Every user is created together with their profile.

use crate::factory::helpers::next_id;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password given to factory users unless overridden.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Factory for users and their profile.
///
/// Defaults:
/// - username: `"user{n}"`
/// - email: `None`
/// - password: `DEFAULT_PASSWORD`, stored as an argon2 hash
/// - club_id: `None`
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: Option<String>,
    password: String,
    club_id: Option<i32>,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            username: format!("user{}", next_id()),
            email: None,
            password: DEFAULT_PASSWORD.to_string(),
            club_id: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn club_id(mut self, club_id: Option<i32>) -> Self {
        self.club_id = club_id;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(self.password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_string();

        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::profile::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            club_id: ActiveValue::Set(self.club_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(user)
    }
}

/// Creates a user without a club.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user whose profile belongs to `club_id`.
pub async fn create_member(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).club_id(Some(club_id)).build().await
}
