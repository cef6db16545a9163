//! Profile storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the onboarding profile is kept on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the profile file
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Storage key; the file is named `{profile_key}.json`
    #[serde(default = "default_profile_key")]
    pub profile_key: String,
}

impl StorageConfig {
    /// Full path of the stored profile file
    pub fn profile_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", self.profile_key))
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyBaseDir);
        }
        if self.profile_key.trim().is_empty() {
            return Err(ValidationError::EmptyProfileKey);
        }
        if self.profile_key.contains(['/', '\\']) || self.profile_key.contains("..") {
            return Err(ValidationError::InvalidProfileKey(self.profile_key.clone()));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            profile_key: default_profile_key(),
        }
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".persona-console")
}

fn default_profile_key() -> String {
    "onboarding-profile".to_string()
}
