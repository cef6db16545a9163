//! In-Memory Profile Store Adapter
//!
//! Keeps the profile record in memory. Useful for testing and for sessions
//! that should not touch disk.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::profile::StoredProfile;
use crate::ports::{ProfileStore, StorageError};

/// In-memory storage for the profile record
#[derive(Debug, Clone)]
pub struct InMemoryProfileStore {
    key: String,
    record: Arc<RwLock<Option<StoredProfile>>>,
}

impl InMemoryProfileStore {
    /// Create an empty in-memory store
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            record: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a store that already holds a record
    pub fn with_record(key: impl Into<String>, record: StoredProfile) -> Self {
        Self {
            key: key.into(),
            record: Arc::new(RwLock::new(Some(record))),
        }
    }

    /// Drop the stored record (useful for tests)
    pub async fn clear(&self) {
        *self.record.write().await = None;
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn save(&self, profile: &StoredProfile) -> Result<(), StorageError> {
        *self.record.write().await = Some(profile.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<StoredProfile>, StorageError> {
        Ok(self.record.read().await.clone())
    }

    fn key(&self) -> &str {
        &self.key
    }
}
