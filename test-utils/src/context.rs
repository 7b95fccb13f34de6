use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test environment with an in-memory database and a session stored in it.
///
/// Both are created lazily on first access and live as long as the context.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets or creates the in-memory SQLite connection.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;
                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Executes the given CREATE TABLE statements in order.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates a session whose store lives in the test database.
    ///
    /// The first call migrates the session table.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let session_store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                Ok(&*self.session.insert(session))
            }
        }
    }

    /// Returns both the database and the session, creating them as needed.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
