//! Filesystem storage adapter for the onboarding profile
//!
//! Stores the profile record as JSON at `{base_dir}/{key}.json`.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::profile::StoredProfile;
use crate::ports::{ProfileStore, StorageError};

/// Filesystem-based profile storage
#[derive(Debug, Clone)]
pub struct FsProfileStore {
    base_dir: PathBuf,
    key: String,
}

impl FsProfileStore {
    /// Create new filesystem storage with base directory and record key
    pub fn new(base_dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            key: key.into(),
        }
    }

    /// Full path to the profile file
    pub fn file_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", self.key))
    }

    /// Ensure base directory exists
    async fn ensure_dir_exists(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| map_io_error("create directory", e))
    }
}

#[async_trait]
impl ProfileStore for FsProfileStore {
    async fn save(&self, profile: &StoredProfile) -> Result<(), StorageError> {
        let file_path = self.file_path();
        self.ensure_dir_exists().await?;

        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        // Write to a temporary file, then rename over the record
        let temp_path = file_path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .await
            .map_err(|e| map_io_error("write temporary file", e))?;
        fs::rename(&temp_path, &file_path)
            .await
            .map_err(|e| map_io_error("rename file", e))?;

        tracing::debug!("Wrote profile record to {}", file_path.display());
        Ok(())
    }

    async fn load(&self) -> Result<Option<StoredProfile>, StorageError> {
        let file_path = self.file_path();

        let json = match fs::read_to_string(&file_path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(map_io_error("read file", e)),
        };

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| StorageError::Malformed(e.to_string()))
    }

    fn key(&self) -> &str {
        &self.key
    }
}

fn map_io_error(action: &str, e: std::io::Error) -> StorageError {
    if e.kind() == ErrorKind::PermissionDenied {
        StorageError::PermissionDenied(format!("Cannot {}: {}", action, e))
    } else {
        StorageError::IoError(format!("Failed to {}: {}", action, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_record() -> StoredProfile {
        StoredProfile {
            role: "devops".to_string(),
            job: vec!["manage-systems".to_string()],
            tasks: vec!["monitoring".to_string()],
            completed: true,
        }
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsProfileStore::new(temp_dir.path(), "onboarding-profile");

        store.save(&sample_record()).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, Some(sample_record()));
    }

    #[tokio::test]
    async fn test_load_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsProfileStore::new(temp_dir.path(), "onboarding-profile");

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_malformed_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsProfileStore::new(temp_dir.path(), "onboarding-profile");
        std::fs::write(store.file_path(), "{ not json").unwrap();

        let result = store.load().await;
        assert!(matches!(result, Err(StorageError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_file_uses_singular_job_field() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsProfileStore::new(temp_dir.path(), "onboarding-profile");
        store.save(&sample_record()).await.unwrap();

        let raw = std::fs::read_to_string(store.file_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.get("job").is_some());
        assert!(value.get("jobs").is_none());
    }

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let store = FsProfileStore::new(&nested, "profile");

        store.save(&sample_record()).await.unwrap();
        assert!(nested.join("profile.json").exists());
    }

    #[tokio::test]
    async fn test_save_replaces_earlier_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsProfileStore::new(temp_dir.path(), "onboarding-profile");
        store.save(&sample_record()).await.unwrap();

        let mut second = sample_record();
        second.role = "admin".to_string();
        store.save(&second).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(second));
        assert!(!store.file_path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_path_uses_key() {
        let store = FsProfileStore::new("/var/lib/console", "onboarding-profile");
        assert_eq!(
            store.file_path(),
            PathBuf::from("/var/lib/console/onboarding-profile.json")
        );
        assert_eq!(store.key(), "onboarding-profile");
    }
}
