//! Personalization engine - pure functions over a profile and the catalogs.
//!
//! # Module Organization
//!
//! - `matching` - navigation item visibility and priority
//! - `buckets` - job-area bucket visibility, de-duplication, and priority
//! - `features` - feature visibility, priority features, welcome, quick actions
//!
//! Every function takes `Option<&AttributeProfile>`; `None` means no profile
//! (before onboarding, or personalization disabled) and opens everything up.
//! Nothing here caches, logs, or fails.

pub mod buckets;
pub mod features;
pub mod matching;

#[cfg(test)]
mod buckets_test;
#[cfg(test)]
mod matching_test;

pub use buckets::{bucket_priority, dedupe_items, ranked_buckets, visible_buckets, visible_items};
pub use features::{
    personalized_welcome, priority_features, quick_actions, ranked_priority_features,
    should_show_feature,
};
pub use matching::{priority, ranked_items, should_show};
