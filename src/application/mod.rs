//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Completing onboarding is the only command; everything else is a query.

pub mod handlers;

pub use handlers::{
    BuildNavigationHandler, CompleteOnboardingHandler, LoadProfileHandler, ModuleExperience,
    ModuleExperienceHandler, NavigationView, OnboardingOutcome,
};
