use crate::server::{service::storage::AnswerFileStore, state::AppState};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

mod applicant;

/// State over the test database with answer files kept in a fresh temporary folder.
///
/// The returned `TempDir` must outlive the state.
fn app_state(db: &DatabaseConnection) -> (AppState, TempDir) {
    let media = tempfile::tempdir().unwrap();
    let state = AppState::new(db.clone(), AnswerFileStore::new(media.path()));

    (state, media)
}
