//! Quick actions offered on module landing pages.

use serde::{Deserialize, Serialize};

use super::IconRef;

/// Closed set of actions a quick-action button can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickActionKind {
    ConfigureFhirEndpoint,
    ConnectEhr,
    UploadRawData,
    CreateAnalyticsTable,
    BuildFeatureSet,
    RegisterDataAsset,
    CreateAlertRule,
    CreateStream,
    ProvisionCluster,
    CreateDashboard,
    InviteUser,
    Unknown,
}

impl QuickActionKind {
    /// Returns all actions with a concrete handler.
    pub fn known() -> &'static [QuickActionKind] {
        &[
            QuickActionKind::ConfigureFhirEndpoint,
            QuickActionKind::ConnectEhr,
            QuickActionKind::UploadRawData,
            QuickActionKind::CreateAnalyticsTable,
            QuickActionKind::BuildFeatureSet,
            QuickActionKind::RegisterDataAsset,
            QuickActionKind::CreateAlertRule,
            QuickActionKind::CreateStream,
            QuickActionKind::ProvisionCluster,
            QuickActionKind::CreateDashboard,
            QuickActionKind::InviteUser,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuickActionKind::ConfigureFhirEndpoint => "configure-fhir-endpoint",
            QuickActionKind::ConnectEhr => "connect-ehr",
            QuickActionKind::UploadRawData => "upload-raw-data",
            QuickActionKind::CreateAnalyticsTable => "create-analytics-table",
            QuickActionKind::BuildFeatureSet => "build-feature-set",
            QuickActionKind::RegisterDataAsset => "register-data-asset",
            QuickActionKind::CreateAlertRule => "create-alert-rule",
            QuickActionKind::CreateStream => "create-stream",
            QuickActionKind::ProvisionCluster => "provision-cluster",
            QuickActionKind::CreateDashboard => "create-dashboard",
            QuickActionKind::InviteUser => "invite-user",
            QuickActionKind::Unknown => "unknown",
        }
    }

    /// Resolves an action name, falling back to `Unknown`.
    pub fn from_name(name: &str) -> QuickActionKind {
        QuickActionKind::known()
            .iter()
            .copied()
            .find(|action| action.name() == name)
            .unwrap_or(QuickActionKind::Unknown)
    }
}

/// A quick-action descriptor as handed to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub action: QuickActionKind,
    pub icon: IconRef,
}
