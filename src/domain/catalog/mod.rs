//! Catalog module - compiled-in, immutable configuration data.
//!
//! - `navigation` - navigation item id to match criteria
//! - `buckets` - job-area buckets of navigation items
//! - `features` - per-module feature lists by role, job, and task
//! - `experience` - task-keyed welcome messages and quick actions
//!
//! Nothing in this module is ever mutated after first access.

mod actions;
mod buckets;
mod experience;
mod features;
mod icons;
mod navigation;

pub use actions::{QuickAction, QuickActionKind};
pub use buckets::{bucket_for_job, Bucket, BucketDefinition, BUCKETS};
pub use experience::{quick_action, welcome_message, GENERIC_WELCOME};
pub use features::{module_features, FeatureId, Module, ModuleFeatureMap};
pub use icons::IconRef;
pub use navigation::{
    navigation_entry, navigation_ids, MatchCriteria, NavigationEntry, NavigationItem,
    HOME_ITEM_ID, NAVIGATION_ENTRIES,
};
