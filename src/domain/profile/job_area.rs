//! JobArea enum representing the broad categories of work.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A broad category of work, multi-selected in the second onboarding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobArea {
    OnboardPractice,
    PrepareDataset,
    ManageSystems,
    ProvisionInfra,
    AnalyzeInsights,
    GovernAccess,
}

impl JobArea {
    /// Returns all job areas in canonical order.
    pub fn all() -> &'static [JobArea] {
        &[
            JobArea::OnboardPractice,
            JobArea::PrepareDataset,
            JobArea::ManageSystems,
            JobArea::ProvisionInfra,
            JobArea::AnalyzeInsights,
            JobArea::GovernAccess,
        ]
    }

    /// Returns the identifier used at the storage boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobArea::OnboardPractice => "onboard-practice",
            JobArea::PrepareDataset => "prepare-dataset",
            JobArea::ManageSystems => "manage-systems",
            JobArea::ProvisionInfra => "provision-infra",
            JobArea::AnalyzeInsights => "analyze-insights",
            JobArea::GovernAccess => "govern-access",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            JobArea::OnboardPractice => "Onboard a Practice",
            JobArea::PrepareDataset => "Prepare Datasets",
            JobArea::ManageSystems => "Manage Systems",
            JobArea::ProvisionInfra => "Provision Infrastructure",
            JobArea::AnalyzeInsights => "Analyze Insights",
            JobArea::GovernAccess => "Govern Access",
        }
    }
}

impl FromStr for JobArea {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobArea::all()
            .iter()
            .copied()
            .find(|job| job.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_value("job", s))
    }
}

impl fmt::Display for JobArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_storage_identifier() {
        for job in JobArea::all() {
            assert_eq!(job.as_str().parse::<JobArea>(), Ok(*job));
        }
    }

    #[test]
    fn rejects_unknown_identifier() {
        assert!("bake-bread".parse::<JobArea>().is_err());
    }

    #[test]
    fn serde_and_as_str_agree() {
        for job in JobArea::all() {
            let json = serde_json::to_string(job).unwrap();
            assert_eq!(json, format!("\"{}\"", job.as_str()));
        }
    }
}
