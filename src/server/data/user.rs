use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// User and profile persistence.
///
/// Generic over the connection so registration can run inside a transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        username: String,
        email: Option<String>,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Finds a user together with their profile.
    pub async fn find_with_profile(
        &self,
        id: i32,
    ) -> Result<Option<(entity::user::Model, Option<entity::profile::Model>)>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .find_also_related(entity::prelude::Profile)
            .one(self.db)
            .await
    }

    /// Creates the user's profile or points the existing one at `club_id`.
    ///
    /// A user never has more than one profile.
    pub async fn upsert_profile(
        &self,
        user_id: i32,
        club_id: Option<i32>,
    ) -> Result<entity::profile::Model, DbErr> {
        let existing = entity::prelude::Profile::find()
            .filter(entity::profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        match existing {
            Some(profile) => {
                let mut active: entity::profile::ActiveModel = profile.into();
                active.club_id = ActiveValue::Set(club_id);
                active.update(self.db).await
            }
            None => {
                entity::profile::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    club_id: ActiveValue::Set(club_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Gets the users whose profile points at `club_id`, ordered by id.
    pub async fn get_by_club_id(
        &self,
        club_id: i32,
    ) -> Result<Vec<(entity::user::Model, Option<entity::profile::Model>)>, DbErr> {
        entity::prelude::User::find()
            .find_also_related(entity::prelude::Profile)
            .filter(entity::profile::Column::ClubId.eq(club_id))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }
}
