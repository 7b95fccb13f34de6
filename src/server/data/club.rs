use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{club::ClubParams, scope::Visibility};

pub struct ClubRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ClubParams) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::club::Model>, DbErr> {
        entity::prelude::Club::find_by_id(id).one(self.db).await
    }

    /// Gets every club allowed by `visibility`, ordered by id.
    pub async fn get_all(&self, visibility: Visibility) -> Result<Vec<entity::club::Model>, DbErr> {
        let mut query = entity::prelude::Club::find().order_by_asc(entity::club::Column::Id);

        match visibility {
            Visibility::All => {}
            Visibility::Club(club_id) => {
                query = query.filter(entity::club::Column::Id.eq(club_id));
            }
            Visibility::Nothing => return Ok(Vec::new()),
        }

        query.all(self.db).await
    }

    pub async fn update(&self, id: i32, params: ClubParams) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(params.name),
        }
        .update(self.db)
        .await
    }

    /// Deletes a club. Forms and applicants are removed by cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Club was deleted
    /// - `Ok(false)` - No club with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Club::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.get_by_id(id).await?.is_some())
    }
}
