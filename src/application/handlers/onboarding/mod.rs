//! Onboarding handlers - completing the wizard and loading the stored profile.

mod complete_onboarding;
mod load_profile;

pub use complete_onboarding::{CompleteOnboardingHandler, OnboardingOutcome};
pub use load_profile::LoadProfileHandler;
