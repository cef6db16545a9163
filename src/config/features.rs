//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Tailor navigation and module content to the stored profile.
    ///
    /// When off, every query is answered as if no profile existed.
    #[serde(default = "default_personalization_enabled")]
    pub personalization_enabled: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            personalization_enabled: default_personalization_enabled(),
        }
    }
}

fn default_personalization_enabled() -> bool {
    true
}
