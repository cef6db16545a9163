//! Job-area bucket registry.
//!
//! Each bucket is an ordered group of navigation items keyed by a single job
//! area. Raw item lists may repeat an id; rendering de-duplicates them.

use serde::Serialize;

use super::{IconRef, NavigationItem};
use crate::domain::profile::JobArea;

/// Static definition of a bucket as compiled into the catalog.
#[derive(Debug, Clone, Copy)]
pub struct BucketDefinition {
    pub id: &'static str,
    pub job_key: JobArea,
    pub label: &'static str,
    pub icon: IconRef,
    pub items: &'static [NavigationItem],
}

/// A bucket ready for rendering, with unique item ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub id: &'static str,
    pub job_key: JobArea,
    pub label: &'static str,
    pub icon: IconRef,
    pub items: Vec<NavigationItem>,
}

const fn item(id: &'static str, label: &'static str, icon: IconRef) -> NavigationItem {
    NavigationItem::new(id, label, icon)
}

/// All buckets in catalog order.
pub static BUCKETS: &[BucketDefinition] = &[
    BucketDefinition {
        id: "practice-onboarding",
        job_key: JobArea::OnboardPractice,
        label: "Practice Onboarding",
        icon: IconRef::Hospital,
        items: &[
            item("practices", "Practices", IconRef::Hospital),
            item("fhir-endpoints", "FHIR Endpoints", IconRef::Plug),
            item("hl7-feeds", "HL7 Feeds", IconRef::FileText),
            item("data-sources", "Data Sources", IconRef::Database),
        ],
    },
    BucketDefinition {
        id: "dataset-preparation",
        job_key: JobArea::PrepareDataset,
        label: "Dataset Preparation",
        icon: IconRef::Table,
        items: &[
            item("data-sources", "Data Sources", IconRef::Database),
            item("pipelines", "Pipelines", IconRef::Pipeline),
            item("datasets", "Datasets", IconRef::Table),
            item("feature-store", "Feature Store", IconRef::Brain),
        ],
    },
    BucketDefinition {
        id: "system-management",
        job_key: JobArea::ManageSystems,
        label: "System Management",
        icon: IconRef::Server,
        items: &[
            item("monitoring", "Monitoring", IconRef::Activity),
            item("kafka-queues", "Kafka Queues", IconRef::Queue),
            item("pipelines", "Pipelines", IconRef::Pipeline),
            item("monitoring", "Service Health", IconRef::Activity),
            item("api-keys", "API Keys", IconRef::Key),
        ],
    },
    BucketDefinition {
        id: "infrastructure",
        job_key: JobArea::ProvisionInfra,
        label: "Infrastructure",
        icon: IconRef::Rocket,
        items: &[
            item("clusters", "Clusters", IconRef::Server),
            item("deployments", "Deployments", IconRef::Rocket),
            item("kafka-queues", "Kafka Queues", IconRef::Queue),
        ],
    },
    BucketDefinition {
        id: "insights",
        job_key: JobArea::AnalyzeInsights,
        label: "Insights",
        icon: IconRef::Chart,
        items: &[
            item("dashboards", "Dashboards", IconRef::Chart),
            item("reports", "Reports", IconRef::FileText),
            item("datasets", "Datasets", IconRef::Table),
        ],
    },
    BucketDefinition {
        id: "governance",
        job_key: JobArea::GovernAccess,
        label: "Governance",
        icon: IconRef::Shield,
        items: &[
            item("access-control", "Access Control", IconRef::Lock),
            item("audit-log", "Audit Log", IconRef::Shield),
            item("api-keys", "API Keys", IconRef::Key),
            item("reports", "Compliance Reports", IconRef::FileText),
        ],
    },
];

/// Looks up the bucket keyed by `job`.
pub fn bucket_for_job(job: JobArea) -> Option<&'static BucketDefinition> {
    BUCKETS.iter().find(|bucket| bucket.job_key == job)
}
