//! Job-area bucket visibility, de-duplication, and ranking.
//!
//! Bucket visibility only checks the bucket's job key against the profile's
//! jobs. Tasks are not consulted here, unlike item visibility in
//! [`super::matching`], which still applies to the items inside a bucket.

use std::collections::HashMap;

use super::matching;
use crate::domain::catalog::{bucket_for_job, Bucket, BucketDefinition, NavigationItem, BUCKETS};
use crate::domain::profile::{AttributeProfile, JobArea};

/// Priority awarded to a bucket whose job key the profile selected.
pub const BUCKET_JOB_WEIGHT: u32 = 20;

/// Returns the buckets to render, in catalog order, with unique items.
///
/// Without a profile every bucket is returned.
pub fn visible_buckets(profile: Option<&AttributeProfile>) -> Vec<Bucket> {
    BUCKETS
        .iter()
        .filter(|bucket| profile.map_or(true, |p| p.has_job(bucket.job_key)))
        .map(render)
        .collect()
}

/// Relevance score of the bucket keyed by `job_key`.
///
/// Sums item priorities over the bucket's raw item list, repeats included.
pub fn bucket_priority(job_key: JobArea, profile: Option<&AttributeProfile>) -> u32 {
    let Some(profile) = profile else {
        return 0;
    };

    let mut score = 0;
    if profile.has_job(job_key) {
        score += BUCKET_JOB_WEIGHT;
    }
    if let Some(bucket) = bucket_for_job(job_key) {
        score += bucket
            .items
            .iter()
            .map(|item| matching::priority(item.id, Some(profile)))
            .sum::<u32>();
    }
    score
}

/// Visible buckets sorted by descending priority; ties keep catalog order.
pub fn ranked_buckets(profile: Option<&AttributeProfile>) -> Vec<(Bucket, u32)> {
    let mut ranked: Vec<(Bucket, u32)> = visible_buckets(profile)
        .into_iter()
        .map(|bucket| {
            let score = bucket_priority(bucket.job_key, profile);
            (bucket, score)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Items of a rendered bucket that pass per-item visibility.
pub fn visible_items(bucket: &Bucket, profile: Option<&AttributeProfile>) -> Vec<NavigationItem> {
    bucket
        .items
        .iter()
        .filter(|item| matching::should_show(item.id, profile))
        .copied()
        .collect()
}

/// Collapses repeated ids.
///
/// Each id keeps the position of its first occurrence and the fields of its
/// last occurrence.
pub fn dedupe_items(items: &[NavigationItem]) -> Vec<NavigationItem> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<NavigationItem> = Vec::with_capacity(items.len());

    for item in items {
        match positions.get(item.id) {
            Some(&index) => out[index] = *item,
            None => {
                positions.insert(item.id, out.len());
                out.push(*item);
            }
        }
    }
    out
}

fn render(definition: &BucketDefinition) -> Bucket {
    Bucket {
        id: definition.id,
        job_key: definition.job_key,
        label: definition.label,
        icon: definition.icon,
        items: dedupe_items(definition.items),
    }
}
