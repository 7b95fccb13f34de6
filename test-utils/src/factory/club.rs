use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for club rows.
///
/// Default name: `"Club {n}"`.
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> ClubFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Club {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).build().await
}
