use crate::{
    model::user::{LoginDto, RegisterDto, UserDto},
    server::error::validation::{check_text, ValidationError},
};

pub const USERNAME_MAX_LEN: usize = 150;
pub const PASSWORD_MIN_LEN: usize = 8;

/// A registered user together with the club from their profile.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub club_id: Option<i32>,
}

impl User {
    pub fn from_entity(
        entity: entity::user::Model,
        profile: Option<entity::profile::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            club_id: profile.and_then(|p| p.club_id),
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            club: self.club_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub club_id: Option<i32>,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto
                .email
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
            password: dto.password,
            club_id: dto.club,
        }
    }

    /// Checks field shapes. Username uniqueness and club existence are checked by the
    /// service against the database.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut err = ValidationError::new();

        check_text(&mut err, "username", &self.username, USERNAME_MAX_LEN);

        if self.password.chars().count() < PASSWORD_MIN_LEN {
            err.add(
                "password",
                format!(
                    "Ensure this field has at least {} characters.",
                    PASSWORD_MIN_LEN
                ),
            );
        }

        if let Some(email) = &self.email {
            if !email.contains('@') {
                err.add("email", "Enter a valid email address.");
            }
        }

        err.into_result()
    }
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            password: dto.password,
        }
    }
}
