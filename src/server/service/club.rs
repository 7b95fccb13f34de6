use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{club::ClubRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        club::{Club, ClubParams},
        scope::Scope,
    },
};

pub struct ClubService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the clubs visible to `scope`.
    pub async fn get_all(&self, scope: &Scope) -> Result<Vec<Club>, AppError> {
        let repo = ClubRepository::new(self.db);

        let clubs = repo.get_all(scope.clubs()).await?;

        Ok(clubs.into_iter().map(Club::from_entity).collect())
    }

    /// Gets a club if it exists and is visible to `scope`.
    pub async fn get_by_id(&self, scope: &Scope, id: i32) -> Result<Option<Club>, AppError> {
        let repo = ClubRepository::new(self.db);

        if !scope.clubs().allows(id) {
            return Ok(None);
        }

        Ok(repo.get_by_id(id).await?.map(Club::from_entity))
    }

    /// Creates a club. Any logged in user may create one.
    ///
    /// A creator without a club joins the new club so they can manage it.
    pub async fn create(&self, scope: &Scope, params: ClubParams) -> Result<Club, AppError> {
        let Some(user) = scope.user() else {
            return Err(AuthError::UserNotInSession.into());
        };
        params.validate()?;

        let txn = self.db.begin().await?;
        let club = ClubRepository::new(&txn).create(params).await?;
        if user.club_id.is_none() {
            UserRepository::new(&txn)
                .upsert_profile(user.id, Some(club.id))
                .await?;
        }
        txn.commit().await?;

        tracing::info!("User {} created club {}", user.id, club.id);

        Ok(Club::from_entity(club))
    }

    /// Renames a club the caller belongs to.
    ///
    /// Returns `None` if the club doesn't exist or is not the caller's club.
    pub async fn update(
        &self,
        scope: &Scope,
        id: i32,
        params: ClubParams,
    ) -> Result<Option<Club>, AppError> {
        let repo = ClubRepository::new(self.db);

        if !scope.manages(id) || !repo.exists(id).await? {
            return Ok(None);
        }
        params.validate()?;

        let club = repo.update(id, params).await?;

        Ok(Some(Club::from_entity(club)))
    }

    /// Deletes the caller's club.
    ///
    /// Returns false if the club doesn't exist or is not the caller's club.
    pub async fn delete(&self, scope: &Scope, id: i32) -> Result<bool, AppError> {
        let repo = ClubRepository::new(self.db);

        if !scope.manages(id) {
            return Ok(false);
        }

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted club {}", id);
        }

        Ok(deleted)
    }
}
