//! Onboarding module - the wizard that produces an AttributeProfile.
//!
//! # Domain Invariants
//!
//! 1. Steps run Role -> Jobs -> Tasks -> Completed, with no skipping or cycles
//! 2. Each step advances only once its guard holds
//! 3. Only tasks whose category was selected as a job can be chosen
//! 4. A profile is produced only on completion, never partially

mod step;
mod wizard;

pub use step::WizardStep;
pub use wizard::OnboardingWizard;
