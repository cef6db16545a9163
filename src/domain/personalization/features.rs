//! Feature visibility, priority features, welcome text, and quick actions.
//!
//! Feature visibility is a pure OR across role, every selected job, and every
//! selected task. There is no role gate here, unlike navigation matching.

use std::collections::HashSet;

use crate::domain::catalog::{
    module_features, quick_action, welcome_message, FeatureId, QuickAction, GENERIC_WELCOME,
};
use crate::domain::profile::AttributeProfile;

/// Maximum number of quick actions offered.
pub const MAX_QUICK_ACTIONS: usize = 3;

/// Decides whether a feature of a module is shown for a profile.
///
/// Missing profile and unknown module both default to shown.
pub fn should_show_feature(module: &str, feature: &str, profile: Option<&AttributeProfile>) -> bool {
    let Some(profile) = profile else {
        return true;
    };
    let Some(map) = module_features(module) else {
        return true;
    };

    map.role_features(profile.role()).contains(&feature)
        || profile
            .jobs()
            .iter()
            .any(|job| map.job_features(*job).contains(&feature))
        || profile
            .tasks()
            .iter()
            .any(|task| map.task_features(*task).contains(&feature))
}

/// Union of the role, job, and task feature lists of a module.
///
/// The result carries no ordering or weighting. See
/// [`ranked_priority_features`] for a task-first ordering.
pub fn priority_features(module: &str, profile: Option<&AttributeProfile>) -> HashSet<FeatureId> {
    let (Some(profile), Some(map)) = (profile, module_features(module)) else {
        return HashSet::new();
    };

    let mut features: HashSet<FeatureId> = HashSet::new();
    features.extend(map.role_features(profile.role()));
    for job in profile.jobs() {
        features.extend(map.job_features(*job));
    }
    for task in profile.tasks() {
        features.extend(map.task_features(*task));
    }
    features
}

/// Priority features ordered task first, then job, then role.
///
/// Within a dimension, features follow profile selection order and then
/// catalog order. Each feature appears once, at its highest-ranked position.
pub fn ranked_priority_features(module: &str, profile: Option<&AttributeProfile>) -> Vec<FeatureId> {
    let (Some(profile), Some(map)) = (profile, module_features(module)) else {
        return Vec::new();
    };

    let task_lists = profile.tasks().iter().map(|task| map.task_features(*task));
    let job_lists = profile.jobs().iter().map(|job| map.job_features(*job));
    let role_list = std::iter::once(map.role_features(profile.role()));

    let mut seen: HashSet<FeatureId> = HashSet::new();
    task_lists
        .chain(job_lists)
        .chain(role_list)
        .flatten()
        .copied()
        .filter(|feature| seen.insert(*feature))
        .collect()
}

/// Greeting keyed by the first selected task, falling back to the role.
pub fn personalized_welcome(profile: Option<&AttributeProfile>) -> String {
    let Some(profile) = profile else {
        return GENERIC_WELCOME.to_string();
    };

    profile
        .tasks()
        .first()
        .and_then(|task| welcome_message(*task))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Welcome, {}", profile.role()))
}

/// Quick actions for the first few selected tasks, in selection order.
///
/// Tasks without an action are skipped and not replaced by later tasks.
pub fn quick_actions(profile: Option<&AttributeProfile>) -> Vec<QuickAction> {
    let Some(profile) = profile else {
        return Vec::new();
    };

    profile
        .tasks()
        .iter()
        .take(MAX_QUICK_ACTIONS)
        .filter_map(|task| quick_action(*task))
        .collect()
}
