//! Navigation item registry.
//!
//! Maps every navigation item id to the role/job/task criteria that make it
//! relevant. The registry is compiled in and never mutated.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use super::IconRef;
use crate::domain::profile::JobArea::*;
use crate::domain::profile::Role::*;
use crate::domain::profile::{JobArea, Role, Task};

/// Id of the home/overview entry, visible for every profile.
pub const HOME_ITEM_ID: &str = "overview";

/// A navigation entry as rendered by presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: IconRef,
}

impl NavigationItem {
    pub const fn new(id: &'static str, label: &'static str, icon: IconRef) -> Self {
        Self { id, label, icon }
    }
}

/// Criteria that make a navigation item relevant to a profile.
///
/// An empty slice places no constraint on that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCriteria {
    pub roles: &'static [Role],
    pub jobs: &'static [JobArea],
    pub tasks: &'static [Task],
}

impl MatchCriteria {
    pub const UNCONSTRAINED: MatchCriteria = MatchCriteria {
        roles: &[],
        jobs: &[],
        tasks: &[],
    };
}

/// A catalog row: the item plus its criteria.
#[derive(Debug, Clone, Copy)]
pub struct NavigationEntry {
    pub item: NavigationItem,
    pub criteria: MatchCriteria,
}

const fn entry(
    id: &'static str,
    label: &'static str,
    icon: IconRef,
    roles: &'static [Role],
    jobs: &'static [JobArea],
    tasks: &'static [Task],
) -> NavigationEntry {
    NavigationEntry {
        item: NavigationItem::new(id, label, icon),
        criteria: MatchCriteria { roles, jobs, tasks },
    }
}

/// All navigation entries in catalog order.
pub static NAVIGATION_ENTRIES: &[NavigationEntry] = &[
    NavigationEntry {
        item: NavigationItem::new(HOME_ITEM_ID, "Overview", IconRef::Home),
        criteria: MatchCriteria::UNCONSTRAINED,
    },
    entry(
        "data-sources",
        "Data Sources",
        IconRef::Database,
        &[Developer, DataEngineer, Admin],
        &[OnboardPractice, PrepareDataset, ManageSystems],
        &[Task::Fhir, Task::Raw, Task::Analytics, Task::AiEnabled, Task::ManageData],
    ),
    entry(
        "kafka-queues",
        "Kafka Queues",
        IconRef::Queue,
        &[DevOps, DataEngineer],
        &[ManageSystems, ProvisionInfra],
        &[Task::Streaming, Task::Monitoring],
    ),
    entry(
        "fhir-endpoints",
        "FHIR Endpoints",
        IconRef::Plug,
        &[Developer, DataEngineer, Admin],
        &[OnboardPractice],
        &[Task::Fhir, Task::ConnectEhr],
    ),
    entry(
        "hl7-feeds",
        "HL7 Feeds",
        IconRef::FileText,
        &[Developer, DataEngineer],
        &[OnboardPractice],
        &[Task::Hl7],
    ),
    entry(
        "practices",
        "Practices",
        IconRef::Hospital,
        &[Admin, Developer],
        &[OnboardPractice],
        &[Task::ConnectEhr],
    ),
    entry(
        "pipelines",
        "Pipelines",
        IconRef::Pipeline,
        &[DataEngineer, Developer],
        &[PrepareDataset, ManageSystems],
        &[Task::Raw, Task::Analytics, Task::Streaming],
    ),
    entry(
        "datasets",
        "Datasets",
        IconRef::Table,
        &[DataEngineer, Analyst],
        &[PrepareDataset, AnalyzeInsights],
        &[Task::Raw, Task::Analytics, Task::AiEnabled],
    ),
    entry(
        "feature-store",
        "Feature Store",
        IconRef::Brain,
        &[DataEngineer, Developer],
        &[PrepareDataset],
        &[Task::AiEnabled],
    ),
    entry(
        "clusters",
        "Clusters",
        IconRef::Server,
        &[DevOps, Admin],
        &[ProvisionInfra, ManageSystems],
        &[Task::Clusters, Task::Scaling],
    ),
    entry(
        "deployments",
        "Deployments",
        IconRef::Rocket,
        &[DevOps, Developer],
        &[ProvisionInfra],
        &[Task::Scaling],
    ),
    entry(
        "monitoring",
        "Monitoring",
        IconRef::Activity,
        &[DevOps, Admin, DataEngineer],
        &[ManageSystems],
        &[Task::Monitoring],
    ),
    entry(
        "dashboards",
        "Dashboards",
        IconRef::Chart,
        &[Analyst, DataEngineer, Admin],
        &[AnalyzeInsights],
        &[Task::Dashboards],
    ),
    entry(
        "reports",
        "Reports",
        IconRef::FileText,
        &[Analyst, Compliance],
        &[AnalyzeInsights, GovernAccess],
        &[Task::Reporting],
    ),
    entry(
        "audit-log",
        "Audit Log",
        IconRef::Shield,
        &[Compliance, Admin],
        &[GovernAccess],
        &[Task::AuditLogs],
    ),
    entry(
        "access-control",
        "Access Control",
        IconRef::Lock,
        &[Admin, Compliance],
        &[GovernAccess],
        &[Task::AccessPolicies],
    ),
    entry(
        "api-keys",
        "API Keys",
        IconRef::Key,
        &[],
        &[ManageSystems, GovernAccess],
        &[Task::AccessPolicies],
    ),
    NavigationEntry {
        item: NavigationItem::new("settings", "Settings", IconRef::Settings),
        criteria: MatchCriteria::UNCONSTRAINED,
    },
];

static BY_ID: Lazy<HashMap<&'static str, &'static NavigationEntry>> = Lazy::new(|| {
    NAVIGATION_ENTRIES
        .iter()
        .map(|entry| (entry.item.id, entry))
        .collect()
});

/// Looks up a catalog entry by item id.
pub fn navigation_entry(id: &str) -> Option<&'static NavigationEntry> {
    BY_ID.get(id).copied()
}

/// Ids of every catalogued navigation item, in catalog order.
pub fn navigation_ids() -> impl Iterator<Item = &'static str> {
    NAVIGATION_ENTRIES.iter().map(|entry| entry.item.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = navigation_ids().collect();
        assert_eq!(ids.len(), NAVIGATION_ENTRIES.len());
    }

    #[test]
    fn home_entry_is_catalogued() {
        assert!(navigation_entry(HOME_ITEM_ID).is_some());
    }

    #[test]
    fn data_sources_criteria_cover_documented_values() {
        let criteria = navigation_entry("data-sources").unwrap().criteria;
        for role in [Developer, DataEngineer, Admin] {
            assert!(criteria.roles.contains(&role));
        }
        for job in [OnboardPractice, PrepareDataset, ManageSystems] {
            assert!(criteria.jobs.contains(&job));
        }
        for task in [
            Task::Fhir,
            Task::Raw,
            Task::Analytics,
            Task::AiEnabled,
            Task::ManageData,
        ] {
            assert!(criteria.tasks.contains(&task));
        }
    }

    #[test]
    fn criteria_slices_hold_no_duplicates() {
        for entry in NAVIGATION_ENTRIES {
            let c = entry.criteria;
            assert_eq!(c.roles.iter().collect::<HashSet<_>>().len(), c.roles.len());
            assert_eq!(c.jobs.iter().collect::<HashSet<_>>().len(), c.jobs.len());
            assert_eq!(c.tasks.iter().collect::<HashSet<_>>().len(), c.tasks.len());
        }
    }

    #[test]
    fn unknown_id_is_not_catalogued() {
        assert!(navigation_entry("billing").is_none());
    }
}
