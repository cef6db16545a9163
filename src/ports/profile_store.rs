//! ProfileStore port for client-local profile persistence.

use async_trait::async_trait;

use crate::domain::profile::StoredProfile;

/// Errors that can occur while reading or writing the stored profile
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Stored profile is malformed: {0}")]
    Malformed(String),

    #[error("Failed to serialize profile: {0}")]
    SerializationFailed(String),
}

/// Durable storage of the single onboarding profile under a fixed key
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Write the profile, replacing any earlier record
    async fn save(&self, profile: &StoredProfile) -> Result<(), StorageError>;

    /// Read the profile record
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    /// Returns `StorageError::Malformed` if the stored bytes are not a profile record
    async fn load(&self) -> Result<Option<StoredProfile>, StorageError>;

    /// Key the record is stored under
    fn key(&self) -> &str;
}
