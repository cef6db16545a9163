//! LoadProfile - Query handler that reads the stored onboarding profile.

use std::sync::Arc;

use crate::domain::profile::AttributeProfile;
use crate::ports::ProfileStore;

/// Handler for loading the profile at startup.
///
/// Every failure resolves to "no profile", which opens up all navigation
/// and features. Nothing here is ever reported to the user as an error.
pub struct LoadProfileHandler {
    store: Arc<dyn ProfileStore>,
    personalization_enabled: bool,
}

impl LoadProfileHandler {
    pub fn new(store: Arc<dyn ProfileStore>, personalization_enabled: bool) -> Self {
        Self {
            store,
            personalization_enabled,
        }
    }

    pub async fn handle(&self) -> Option<AttributeProfile> {
        if !self.personalization_enabled {
            tracing::debug!("Personalization disabled, ignoring stored profile");
            return None;
        }

        let record = match self.store.load().await {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::debug!(key = self.store.key(), "No stored profile");
                return None;
            }
            Err(e) => {
                tracing::warn!(key = self.store.key(), "Could not read stored profile: {}", e);
                return None;
            }
        };

        match record.into_profile() {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(key = self.store.key(), "Ignoring stored profile: {}", e);
                None
            }
        }
    }
}
