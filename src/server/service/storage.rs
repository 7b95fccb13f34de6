//! Storage for files uploaded as answers.

use std::path::{Component, Path, PathBuf};

use crate::server::error::AppError;

/// Folder under the media root that answer files are written to.
pub const ANSWER_DIR: &str = "answers";

/// Writes uploaded answer files beneath `<media_root>/answers/`.
///
/// Stored files are referenced by their path relative to the media root, e.g.
/// `answers/6f1c..._resume.pdf`.
#[derive(Clone, Debug)]
pub struct AnswerFileStore {
    root: PathBuf,
}

impl AnswerFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Saves `bytes` under a unique name derived from `file_name`.
    ///
    /// # Returns
    /// - `Ok(String)` - Relative path of the stored file
    /// - `Err(AppError::IoErr)` - Directory creation or write failed
    pub async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        let dir = self.root.join(ANSWER_DIR);
        tokio::fs::create_dir_all(&dir).await?;

        let stored_name = format!("{}_{}", uuid::Uuid::new_v4().simple(), sanitize(file_name));
        tokio::fs::write(dir.join(&stored_name), bytes).await?;

        let relative = format!("{}/{}", ANSWER_DIR, stored_name);
        tracing::info!("Stored answer file {}", relative);

        Ok(relative)
    }

    /// Removes a previously stored file. Missing files and paths outside the answer
    /// folder are ignored.
    pub async fn delete(&self, relative: &str) -> Result<(), AppError> {
        let path = Path::new(relative);
        let inside_answers = path.starts_with(ANSWER_DIR)
            && path.components().all(|c| matches!(c, Component::Normal(_)));
        if !inside_answers {
            tracing::warn!("Refusing to delete file outside answer folder: {}", relative);
            return Ok(());
        }

        match tokio::fs::remove_file(self.root.join(path)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keeps ASCII letters, digits, `.`, `-` and `_`; everything else becomes `_`.
fn sanitize(file_name: &str) -> String {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_directories_and_odd_characters() {
        assert_eq!(sanitize("../../etc/passwd"), "passwd");
        assert_eq!(sanitize("my resume (1).pdf"), "my_resume__1_.pdf");
        assert_eq!(sanitize(".."), "upload");
        assert_eq!(sanitize(""), "upload");
    }

    #[tokio::test]
    async fn saves_under_answers_folder() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = AnswerFileStore::new(dir.path());

        let relative = store.save("resume.pdf", b"%PDF").await?;

        assert!(relative.starts_with("answers/"));
        assert!(relative.ends_with("_resume.pdf"));
        let written = tokio::fs::read(dir.path().join(&relative)).await?;
        assert_eq!(written, b"%PDF");

        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_file_and_ignores_missing() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = AnswerFileStore::new(dir.path());
        let relative = store.save("notes.txt", b"hello").await?;

        store.delete(&relative).await?;
        store.delete(&relative).await?;

        assert!(!dir.path().join(&relative).exists());

        Ok(())
    }

    #[tokio::test]
    async fn delete_ignores_paths_outside_answers() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let outside = dir.path().join("keep.txt");
        tokio::fs::write(&outside, b"keep").await?;
        let store = AnswerFileStore::new(dir.path().join("media"));

        store.delete("answers/../../keep.txt").await?;

        assert!(outside.exists());

        Ok(())
    }
}
