use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    /// Club from the user's profile.
    pub club: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
    #[serde(default)]
    pub club: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}
