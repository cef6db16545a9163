//! Navigation item visibility and priority.
//!
//! Role is a hard gate for visibility; job and task are alternatives:
//! `role AND (job OR task)`. Feature visibility in [`super::features`] uses a
//! different rule and the two must stay distinct.

use crate::domain::catalog::{navigation_entry, MatchCriteria, HOME_ITEM_ID};
use crate::domain::profile::AttributeProfile;

/// Priority awarded when the profile role is listed in the criteria.
pub const ROLE_WEIGHT: u32 = 10;
/// Priority awarded for every selected job listed in the criteria.
pub const JOB_WEIGHT: u32 = 5;
/// Priority awarded for every selected task listed in the criteria.
pub const TASK_WEIGHT: u32 = 3;

/// Decides whether a navigation item is shown for a profile.
///
/// Unknown ids are never shown. Without a profile every catalogued item is
/// shown, and the home entry is shown for every profile.
pub fn should_show(item_id: &str, profile: Option<&AttributeProfile>) -> bool {
    let Some(entry) = navigation_entry(item_id) else {
        return false;
    };
    let Some(profile) = profile else {
        return true;
    };
    if item_id == HOME_ITEM_ID {
        return true;
    }

    let criteria = &entry.criteria;
    role_matches(criteria, profile)
        && (job_matches(criteria, profile) || task_matches(criteria, profile))
}

/// Relevance score of a navigation item for a profile.
///
/// Computed independently of [`should_show`]: a matching role scores even
/// when the item is hidden.
pub fn priority(item_id: &str, profile: Option<&AttributeProfile>) -> u32 {
    let Some(profile) = profile else {
        return 0;
    };
    if item_id == HOME_ITEM_ID {
        return 0;
    }
    let Some(entry) = navigation_entry(item_id) else {
        return 0;
    };

    let criteria = &entry.criteria;
    let mut score = 0;
    if criteria.roles.contains(&profile.role()) {
        score += ROLE_WEIGHT;
    }
    score += JOB_WEIGHT * shared_jobs(criteria, profile);
    score += TASK_WEIGHT * shared_tasks(criteria, profile);
    score
}

/// Returns the visible ids among `item_ids`, highest priority first.
///
/// Ties keep their input order.
pub fn ranked_items<'a>(
    item_ids: impl IntoIterator<Item = &'a str>,
    profile: Option<&AttributeProfile>,
) -> Vec<&'a str> {
    let mut ranked: Vec<(&str, u32)> = item_ids
        .into_iter()
        .filter(|id| should_show(id, profile))
        .map(|id| (id, priority(id, profile)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().map(|(id, _)| id).collect()
}

fn role_matches(criteria: &MatchCriteria, profile: &AttributeProfile) -> bool {
    criteria.roles.is_empty() || criteria.roles.contains(&profile.role())
}

fn job_matches(criteria: &MatchCriteria, profile: &AttributeProfile) -> bool {
    criteria.jobs.is_empty() || shared_jobs(criteria, profile) > 0
}

fn task_matches(criteria: &MatchCriteria, profile: &AttributeProfile) -> bool {
    criteria.tasks.is_empty() || shared_tasks(criteria, profile) > 0
}

fn shared_jobs(criteria: &MatchCriteria, profile: &AttributeProfile) -> u32 {
    profile
        .jobs()
        .iter()
        .filter(|job| criteria.jobs.contains(job))
        .count() as u32
}

fn shared_tasks(criteria: &MatchCriteria, profile: &AttributeProfile) -> u32 {
    profile
        .tasks()
        .iter()
        .filter(|task| criteria.tasks.contains(task))
        .count() as u32
}
