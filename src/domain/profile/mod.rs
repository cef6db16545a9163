//! Profile module - the attributes collected during onboarding.
//!
//! # Domain Invariants
//!
//! 1. A profile always has exactly one role, at least one job, at least one task
//! 2. A profile is complete when it exists; there is no partial profile
//! 3. Every task belongs to exactly one job area (its category)
//! 4. The storage record names the job list `job`, not `jobs`

mod attribute_profile;
mod job_area;
mod role;
mod stored;
mod task;

pub use attribute_profile::AttributeProfile;
pub use job_area::JobArea;
pub use role::Role;
pub use stored::StoredProfile;
pub use task::Task;
