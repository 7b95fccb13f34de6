//! Clubhouse Test Utils
//!
//! Shared utilities for building tests of the clubhouse backend. Tests get an in-memory
//! SQLite database with just the tables they need, a session backed by the same
//! database, and factories for inserting rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Builders for club, user, form, question, applicant, submission and answer rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_clubs() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_club_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let club = factory::create_club(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
