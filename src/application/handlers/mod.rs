//! Command and query handlers.
//!
//! - `onboarding` - completing the wizard, loading the stored profile
//! - `navigation` - sidebar and module landing read models

pub mod navigation;
pub mod onboarding;

pub use navigation::{
    BuildNavigationHandler, ModuleExperience, ModuleExperienceHandler, NavigationBucketView,
    NavigationItemView, NavigationView,
};
pub use onboarding::{CompleteOnboardingHandler, LoadProfileHandler, OnboardingOutcome};
