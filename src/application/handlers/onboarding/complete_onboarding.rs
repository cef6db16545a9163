//! CompleteOnboarding - Command handler that finishes the wizard and persists the profile.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::onboarding::OnboardingWizard;
use crate::domain::profile::{AttributeProfile, StoredProfile};
use crate::ports::{ProfileStore, StorageError};

/// Result of a completed onboarding run.
///
/// The profile is authoritative for the session whether or not it was
/// persisted; a failed write is reported as a warning only.
#[derive(Debug, Clone)]
pub struct OnboardingOutcome {
    pub profile: AttributeProfile,
    pub persistence_warning: Option<StorageError>,
}

impl OnboardingOutcome {
    pub fn persisted(&self) -> bool {
        self.persistence_warning.is_none()
    }
}

/// Handler for completing onboarding.
pub struct CompleteOnboardingHandler {
    store: Arc<dyn ProfileStore>,
}

impl CompleteOnboardingHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Completes the wizard and writes the profile once.
    ///
    /// # Errors
    ///
    /// Returns the wizard's error if it is not on a completable task step.
    /// Storage failures never error; see [`OnboardingOutcome::persistence_warning`].
    pub async fn handle(
        &self,
        wizard: &mut OnboardingWizard,
    ) -> Result<OnboardingOutcome, DomainError> {
        // 1. Assemble the profile (all or nothing)
        let profile = wizard.complete()?;

        // 2. Persist; the in-memory profile stays authoritative either way
        let record = StoredProfile::from(&profile);
        let persistence_warning = match self.store.save(&record).await {
            Ok(()) => {
                tracing::info!(
                    role = %record.role,
                    jobs = record.job.len(),
                    tasks = record.tasks.len(),
                    key = self.store.key(),
                    "Onboarding completed"
                );
                None
            }
            Err(e) => {
                tracing::warn!(
                    key = self.store.key(),
                    "Onboarding completed but profile was not persisted: {}",
                    e
                );
                Some(e)
            }
        };

        Ok(OnboardingOutcome {
            profile,
            persistence_warning,
        })
    }
}
