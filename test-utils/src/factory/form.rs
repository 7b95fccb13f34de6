use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for application forms.
///
/// Default title: `"Application {n}"`. Both timestamps default to now.
pub struct FormFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    title: String,
    updated_at: chrono::DateTime<Utc>,
}

impl<'a> FormFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, club_id: i32) -> Self {
        Self {
            db,
            club_id,
            title: format!("Application {}", next_id()),
            updated_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Backdates `updated_at`, useful when asserting that a write bumps it.
    pub fn updated_at(mut self, updated_at: chrono::DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub async fn build(self) -> Result<entity::application_form::Model, DbErr> {
        entity::application_form::ActiveModel {
            club_id: ActiveValue::Set(self.club_id),
            title: ActiveValue::Set(self.title),
            created_at: ActiveValue::Set(self.updated_at),
            updated_at: ActiveValue::Set(self.updated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_form(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::application_form::Model, DbErr> {
    FormFactory::new(db, club_id).build().await
}
