//! Task enum representing fine-grained activities scoped to a job area.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::JobArea;
use crate::domain::foundation::ValidationError;

/// A fine-grained activity, multi-selected in the third onboarding step.
///
/// Every task belongs to exactly one [`JobArea`], its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Task {
    // Onboard a practice
    Fhir,
    Hl7,
    ConnectEhr,
    // Prepare datasets
    Raw,
    Analytics,
    AiEnabled,
    // Manage systems
    ManageData,
    Monitoring,
    Streaming,
    // Provision infrastructure
    Clusters,
    Scaling,
    // Analyze insights
    Dashboards,
    Reporting,
    // Govern access
    AuditLogs,
    AccessPolicies,
}

impl Task {
    /// Returns all tasks grouped by category in canonical order.
    pub fn all() -> &'static [Task] {
        &[
            Task::Fhir,
            Task::Hl7,
            Task::ConnectEhr,
            Task::Raw,
            Task::Analytics,
            Task::AiEnabled,
            Task::ManageData,
            Task::Monitoring,
            Task::Streaming,
            Task::Clusters,
            Task::Scaling,
            Task::Dashboards,
            Task::Reporting,
            Task::AuditLogs,
            Task::AccessPolicies,
        ]
    }

    /// Returns the job area this task is scoped to.
    pub fn category(&self) -> JobArea {
        match self {
            Task::Fhir | Task::Hl7 | Task::ConnectEhr => JobArea::OnboardPractice,
            Task::Raw | Task::Analytics | Task::AiEnabled => JobArea::PrepareDataset,
            Task::ManageData | Task::Monitoring | Task::Streaming => JobArea::ManageSystems,
            Task::Clusters | Task::Scaling => JobArea::ProvisionInfra,
            Task::Dashboards | Task::Reporting => JobArea::AnalyzeInsights,
            Task::AuditLogs | Task::AccessPolicies => JobArea::GovernAccess,
        }
    }

    /// Returns the tasks whose category is one of `jobs`, in canonical order.
    pub fn in_categories(jobs: &[JobArea]) -> Vec<Task> {
        Task::all()
            .iter()
            .copied()
            .filter(|task| jobs.contains(&task.category()))
            .collect()
    }

    /// Returns the identifier used at the storage boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Fhir => "fhir",
            Task::Hl7 => "hl7",
            Task::ConnectEhr => "connect-ehr",
            Task::Raw => "raw",
            Task::Analytics => "analytics",
            Task::AiEnabled => "ai-enabled",
            Task::ManageData => "manage-data",
            Task::Monitoring => "monitoring",
            Task::Streaming => "streaming",
            Task::Clusters => "clusters",
            Task::Scaling => "scaling",
            Task::Dashboards => "dashboards",
            Task::Reporting => "reporting",
            Task::AuditLogs => "audit-logs",
            Task::AccessPolicies => "access-policies",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Task::Fhir => "Ingest FHIR resources",
            Task::Hl7 => "Ingest HL7 feeds",
            Task::ConnectEhr => "Connect an EHR",
            Task::Raw => "Land raw data",
            Task::Analytics => "Build analytics tables",
            Task::AiEnabled => "Prepare AI-ready datasets",
            Task::ManageData => "Manage data assets",
            Task::Monitoring => "Monitor services",
            Task::Streaming => "Operate streaming",
            Task::Clusters => "Provision clusters",
            Task::Scaling => "Tune scaling",
            Task::Dashboards => "Build dashboards",
            Task::Reporting => "Schedule reports",
            Task::AuditLogs => "Review audit logs",
            Task::AccessPolicies => "Manage access policies",
        }
    }
}

impl FromStr for Task {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Task::all()
            .iter()
            .copied()
            .find(|task| task.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_value("task", s))
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
