//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through Axum's
//! state extraction. It holds the database pool and the store for uploaded answer files.

use sea_orm::DatabaseConnection;

use crate::server::service::storage::AnswerFileStore;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `AnswerFileStore` only holds its root path.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Writes and removes files uploaded as answers.
    pub file_store: AnswerFileStore,
}

impl AppState {
    pub fn new(db: DatabaseConnection, file_store: AnswerFileStore) -> Self {
        Self { db, file_store }
    }
}
