use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Club, User, Profile};
///
/// let test = TestBuilder::new()
///     .with_table(Club)
///     .with_table(User)
///     .with_table(Profile)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys should be added after the tables they reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and profile tables along with the club table they reference.
    pub fn with_user_tables(self) -> Self {
        self.with_table(Club).with_table(User).with_table(Profile)
    }

    /// Adds every table of the application, in dependency order:
    /// club, user, profile, form, question, applicant, submission, answer.
    pub fn with_club_tables(self) -> Self {
        self.with_user_tables()
            .with_table(ApplicationForm)
            .with_table(ApplicationQuestion)
            .with_table(Applicant)
            .with_table(ApplicationSubmission)
            .with_table(ApplicationAnswer)
    }

    /// Connects to an in-memory SQLite database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
