//! Task-keyed welcome messages and quick actions.

use super::{IconRef, QuickAction, QuickActionKind};
use crate::domain::profile::Task;

/// Greeting shown when no profile exists.
pub const GENERIC_WELCOME: &str = "Welcome to the control plane";

/// Returns the welcome message for a task, if one is written for it.
pub fn welcome_message(task: Task) -> Option<&'static str> {
    match task {
        Task::Fhir => Some("Ready to bring FHIR resources into your workspace?"),
        Task::Hl7 => Some("Your HL7 feeds are one connection away."),
        Task::ConnectEhr => Some("Let's connect your first EHR."),
        Task::Raw => Some("Land raw data and start shaping your datasets."),
        Task::Analytics => Some("Turn your datasets into analytics-ready tables."),
        Task::AiEnabled => Some("Prepare AI-ready datasets for your models."),
        Task::ManageData => Some("Keep your data assets organized and in sync."),
        Task::Monitoring => Some("Keep an eye on every service from one place."),
        Task::Streaming => Some("Your streams and queues at a glance."),
        Task::Clusters => Some("Provision and manage your clusters."),
        Task::Dashboards => Some("Build dashboards that tell the story."),
        Task::AuditLogs => Some("Every change, accounted for."),
        Task::AccessPolicies => Some("Decide who can do what."),
        Task::Scaling | Task::Reporting => None,
    }
}

/// Returns the quick action for a task, if one exists.
pub fn quick_action(task: Task) -> Option<QuickAction> {
    let (label, action, icon) = match task {
        Task::Fhir => (
            "Configure FHIR endpoint",
            QuickActionKind::ConfigureFhirEndpoint,
            IconRef::Plug,
        ),
        Task::ConnectEhr => ("Connect an EHR", QuickActionKind::ConnectEhr, IconRef::Hospital),
        Task::Raw => ("Upload raw data", QuickActionKind::UploadRawData, IconRef::Upload),
        Task::Analytics => (
            "Create analytics table",
            QuickActionKind::CreateAnalyticsTable,
            IconRef::Table,
        ),
        Task::AiEnabled => (
            "Build a feature set",
            QuickActionKind::BuildFeatureSet,
            IconRef::Brain,
        ),
        Task::ManageData => (
            "Register a data asset",
            QuickActionKind::RegisterDataAsset,
            IconRef::Database,
        ),
        Task::Monitoring => (
            "Create alert rule",
            QuickActionKind::CreateAlertRule,
            IconRef::Activity,
        ),
        Task::Streaming => ("Create a stream", QuickActionKind::CreateStream, IconRef::Queue),
        Task::Clusters => (
            "Provision a cluster",
            QuickActionKind::ProvisionCluster,
            IconRef::Server,
        ),
        Task::Dashboards => (
            "Create dashboard",
            QuickActionKind::CreateDashboard,
            IconRef::Chart,
        ),
        Task::AccessPolicies => ("Invite a user", QuickActionKind::InviteUser, IconRef::Lock),
        Task::Hl7 | Task::Scaling | Task::Reporting | Task::AuditLogs => return None,
    };

    Some(QuickAction {
        label,
        action,
        icon,
    })
}
