//! Per-module feature registry.
//!
//! For each module, three maps name the features relevant to a role, a job
//! area, or a task. The registry is built once on first use.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;
use crate::domain::profile::{JobArea, Role, Task};

/// Identifier of a feature flag within a module.
pub type FeatureId = &'static str;

/// Console modules that carry feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Module {
    DataSources,
    Pipelines,
    Monitoring,
    Insights,
    Governance,
    Settings,
}

impl Module {
    pub fn all() -> &'static [Module] {
        &[
            Module::DataSources,
            Module::Pipelines,
            Module::Monitoring,
            Module::Insights,
            Module::Governance,
            Module::Settings,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Module::DataSources => "data-sources",
            Module::Pipelines => "pipelines",
            Module::Monitoring => "monitoring",
            Module::Insights => "insights",
            Module::Governance => "governance",
            Module::Settings => "settings",
        }
    }
}

impl FromStr for Module {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Module::all()
            .iter()
            .copied()
            .find(|module| module.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_value("module", s))
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Feature lists of one module, keyed by each profile dimension.
#[derive(Debug, Clone, Default)]
pub struct ModuleFeatureMap {
    pub roles: HashMap<Role, Vec<FeatureId>>,
    pub jobs: HashMap<JobArea, Vec<FeatureId>>,
    pub tasks: HashMap<Task, Vec<FeatureId>>,
}

impl ModuleFeatureMap {
    pub fn role_features(&self, role: Role) -> &[FeatureId] {
        self.roles.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn job_features(&self, job: JobArea) -> &[FeatureId] {
        self.jobs.get(&job).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn task_features(&self, task: Task) -> &[FeatureId] {
        self.tasks.get(&task).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every feature named anywhere in the module, sorted and unique.
    pub fn all_features(&self) -> Vec<FeatureId> {
        let mut features: Vec<FeatureId> = self
            .roles
            .values()
            .chain(self.jobs.values())
            .chain(self.tasks.values())
            .flatten()
            .copied()
            .collect();
        features.sort_unstable();
        features.dedup();
        features
    }

    fn role(mut self, role: Role, features: &[FeatureId]) -> Self {
        self.roles.insert(role, features.to_vec());
        self
    }

    fn job(mut self, job: JobArea, features: &[FeatureId]) -> Self {
        self.jobs.insert(job, features.to_vec());
        self
    }

    fn task(mut self, task: Task, features: &[FeatureId]) -> Self {
        self.tasks.insert(task, features.to_vec());
        self
    }
}

static MODULE_FEATURES: Lazy<HashMap<Module, ModuleFeatureMap>> = Lazy::new(|| {
    let mut modules = HashMap::new();

    modules.insert(
        Module::DataSources,
        ModuleFeatureMap::default()
            .role(Role::Developer, &["api-connectors", "schema-explorer"])
            .role(
                Role::DataEngineer,
                &["bulk-import", "schema-explorer", "connection-health"],
            )
            .role(Role::Admin, &["credential-vault", "connection-health"])
            .job(JobArea::OnboardPractice, &["fhir-wizard", "practice-mapping"])
            .job(JobArea::PrepareDataset, &["bulk-import", "data-preview"])
            .job(JobArea::ManageSystems, &["connection-health", "sync-schedules"])
            .task(Task::Fhir, &["fhir-wizard", "fhir-validation"])
            .task(Task::Hl7, &["hl7-parser"])
            .task(Task::ConnectEhr, &["ehr-connectors"])
            .task(Task::Raw, &["data-preview", "bulk-import"])
            .task(Task::ManageData, &["sync-schedules", "retention-rules"]),
    );

    modules.insert(
        Module::Pipelines,
        ModuleFeatureMap::default()
            .role(Role::DataEngineer, &["dag-editor", "backfill", "lineage"])
            .role(Role::Developer, &["dag-editor", "sdk-snippets"])
            .job(JobArea::PrepareDataset, &["transform-library", "lineage"])
            .job(JobArea::ManageSystems, &["run-history", "failure-alerts"])
            .task(Task::Raw, &["ingest-templates"])
            .task(Task::Analytics, &["transform-library", "sql-workbench"])
            .task(Task::AiEnabled, &["feature-engineering"])
            .task(Task::Streaming, &["stream-processors"]),
    );

    modules.insert(
        Module::Monitoring,
        ModuleFeatureMap::default()
            .role(Role::DevOps, &["service-map", "alert-rules", "on-call"])
            .role(Role::Admin, &["usage-quotas"])
            .role(Role::DataEngineer, &["pipeline-health"])
            .job(JobArea::ManageSystems, &["service-map", "log-search"])
            .job(JobArea::ProvisionInfra, &["capacity-planning"])
            .task(Task::Monitoring, &["alert-rules", "log-search"])
            .task(Task::Scaling, &["autoscaling-insights"])
            .task(Task::Clusters, &["node-health"])
            .task(Task::Streaming, &["consumer-lag"]),
    );

    modules.insert(
        Module::Insights,
        ModuleFeatureMap::default()
            .role(Role::Analyst, &["chart-builder", "saved-queries"])
            .role(Role::DataEngineer, &["sql-workbench"])
            .role(Role::Compliance, &["export-audit"])
            .job(JobArea::AnalyzeInsights, &["chart-builder", "report-scheduler"])
            .task(Task::Dashboards, &["chart-builder", "dashboard-sharing"])
            .task(Task::Reporting, &["report-scheduler", "pdf-export"])
            .task(Task::Analytics, &["sql-workbench"]),
    );

    modules.insert(
        Module::Governance,
        ModuleFeatureMap::default()
            .role(
                Role::Compliance,
                &["audit-trail", "policy-review", "export-audit"],
            )
            .role(Role::Admin, &["role-editor", "policy-review"])
            .job(JobArea::GovernAccess, &["audit-trail", "role-editor"])
            .task(Task::AuditLogs, &["audit-trail", "audit-search"])
            .task(Task::AccessPolicies, &["role-editor", "policy-simulator"]),
    );

    modules
});

/// Looks up the feature map of a module by id.
///
/// Returns `None` for ids that are not modules and for modules without
/// feature flags.
pub fn module_features(module: &str) -> Option<&'static ModuleFeatureMap> {
    let module: Module = module.parse().ok()?;
    MODULE_FEATURES.get(&module)
}
