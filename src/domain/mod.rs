//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, state machine trait)
//! - `profile` - Role, job area, task, and the completed AttributeProfile
//! - `catalog` - Compiled-in navigation, bucket, and feature registries
//! - `personalization` - Pure visibility and ranking functions
//! - `onboarding` - The wizard that produces a profile

pub mod catalog;
pub mod foundation;
pub mod onboarding;
pub mod personalization;
pub mod profile;
