use crate::server::model::{scope::Scope, user::User};

mod club;

/// Scope of a logged in member of `club_id`.
fn member_scope(user: &entity::user::Model, club_id: Option<i32>) -> Scope {
    Scope::Member(User {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        club_id,
    })
}
