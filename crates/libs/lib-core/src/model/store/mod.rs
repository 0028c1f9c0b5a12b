//! # Submission Store
//!
//! Writes each contact submission to its own JSON file under a root directory.
//!
//! One file per submission keeps concurrent requests independent: nothing is
//! appended to or rewritten, and a name collision is reported rather than
//! overwriting an earlier record.

// region: --- Modules
pub mod models;
// endregion: --- Modules

// region: --- Re-exports
pub use models::StoredSubmission;
// endregion: --- Re-exports

// region: --- Types and Functions
use crate::error::Result;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Directory-backed store for submissions.
#[derive(Clone, Debug)]
pub struct SubmissionStore {
    root: PathBuf,
}

impl SubmissionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist yet.
    pub async fn init(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Write `record` and return the path of the new file.
    pub async fn save(&self, record: &StoredSubmission) -> Result<PathBuf> {
        let path = self.root.join(record.file_name());
        let body = serde_json::to_vec_pretty(record)
            .map_err(|e| crate::AppError::Internal(format!("Failed to encode submission: {}", e)))?;

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(&body).await?;
        file.flush().await?;

        debug!(path = %path.display(), bytes = body.len(), "Submission written");
        Ok(path)
    }

    /// Read back a stored record.
    pub async fn load(&self, path: &Path) -> Result<StoredSubmission> {
        let bytes = tokio::fs::read(path).await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            crate::AppError::Storage(format!("Corrupt submission {}: {}", path.display(), e))
        })
    }
}
// endregion: --- Types and Functions

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::dto::contact::ContactSubmission;

    fn record(email: &str) -> StoredSubmission {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        StoredSubmission::new(ContactSubmission::from_raw("Alice", email, "hi"), at)
    }

    #[test]
    fn test_file_name_uses_timestamp_and_email() {
        assert_eq!(
            record("a@b.com").file_name(),
            "2024-03-01T12-30-05-000000Z_a@b.com.json"
        );
    }

    #[test]
    fn test_file_name_neutralises_path_separators() {
        let name = record("../../etc/passwd@x.y").file_name();
        assert!(!name.contains('/'));
        assert_eq!(name, "2024-03-01T12-30-05-000000Z_.._.._etc_passwd@x.y.json");
    }

    #[test]
    fn test_file_name_caps_long_email() {
        let email = format!("{}@example.com", "a".repeat(250));
        let name = record(&email).file_name();

        assert!(name.len() <= 255, "file name is {} bytes", name.len());
        let expected = format!("2024-03-01T12-30-05-000000Z_{}.json", "a".repeat(128));
        assert_eq!(name, expected);
    }

    #[tokio::test]
    async fn test_save_long_email_keeps_full_address() {
        let dir = tempfile::tempdir().unwrap();
        let store = SubmissionStore::new(dir.path());
        let email = format!("{}@example.com", "a".repeat(250));

        let saved = record(&email);
        let path = store.save(&saved).await.unwrap();

        assert_eq!(store.load(&path).await.unwrap().email, email);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SubmissionStore::new(dir.path().join("submissions"));
        store.init().await.unwrap();

        let saved = record("a@b.com");
        let path = store.save(&saved).await.unwrap();

        assert_eq!(path.parent().unwrap(), store.root());
        assert_eq!(store.load(&path).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn test_save_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = SubmissionStore::new(dir.path());

        store.save(&record("a@b.com")).await.unwrap();
        let err = store.save(&record("a@b.com")).await.unwrap_err();

        assert!(matches!(err, crate::AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_save_without_init_fails_as_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SubmissionStore::new(dir.path().join("missing"));

        let err = store.save(&record("a@b.com")).await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to save submission");
    }
}
