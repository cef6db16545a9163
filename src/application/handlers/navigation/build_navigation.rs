//! BuildNavigation - Query handler assembling the personalized sidebar.

use serde::Serialize;

use crate::domain::catalog::{navigation_entry, IconRef, NavigationItem, HOME_ITEM_ID};
use crate::domain::personalization::{priority, ranked_buckets, visible_items};
use crate::domain::profile::{AttributeProfile, JobArea};

/// A navigation item with its relevance score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItemView {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: IconRef,
    pub priority: u32,
}

/// A bucket with its visible items, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationBucketView {
    pub id: &'static str,
    pub job_key: JobArea,
    pub label: &'static str,
    pub icon: IconRef,
    pub priority: u32,
    pub items: Vec<NavigationItemView>,
}

/// The complete sidebar for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    pub home: Option<NavigationItemView>,
    pub buckets: Vec<NavigationBucketView>,
}

/// Handler for building the navigation view.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildNavigationHandler;

impl BuildNavigationHandler {
    pub fn new() -> Self {
        Self
    }

    /// Ranked buckets, each holding its visible, de-duplicated items.
    ///
    /// Buckets left without a visible item are dropped.
    pub fn handle(&self, profile: Option<&AttributeProfile>) -> NavigationView {
        let home = navigation_entry(HOME_ITEM_ID).map(|entry| item_view(&entry.item, profile));

        let buckets = ranked_buckets(profile)
            .into_iter()
            .filter_map(|(bucket, score)| {
                let items: Vec<NavigationItemView> = visible_items(&bucket, profile)
                    .iter()
                    .map(|item| item_view(item, profile))
                    .collect();
                if items.is_empty() {
                    return None;
                }
                Some(NavigationBucketView {
                    id: bucket.id,
                    job_key: bucket.job_key,
                    label: bucket.label,
                    icon: bucket.icon,
                    priority: score,
                    items,
                })
            })
            .collect();

        NavigationView { home, buckets }
    }
}

fn item_view(item: &NavigationItem, profile: Option<&AttributeProfile>) -> NavigationItemView {
    NavigationItemView {
        id: item.id,
        label: item.label,
        icon: item.icon,
        priority: priority(item.id, profile),
    }
}
