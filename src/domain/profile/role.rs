//! Role enum representing the primary persona chosen during onboarding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The single primary persona a user selects in the first onboarding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Developer,
    DataEngineer,
    #[serde(rename = "devops")]
    DevOps,
    Analyst,
    Admin,
    Compliance,
}

impl Role {
    /// Returns all roles in the order they are offered during onboarding.
    pub fn all() -> &'static [Role] {
        &[
            Role::Developer,
            Role::DataEngineer,
            Role::DevOps,
            Role::Analyst,
            Role::Admin,
            Role::Compliance,
        ]
    }

    /// Returns the identifier used at the storage boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::DataEngineer => "data-engineer",
            Role::DevOps => "devops",
            Role::Analyst => "analyst",
            Role::Admin => "admin",
            Role::Compliance => "compliance",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Developer => "Developer",
            Role::DataEngineer => "Data Engineer",
            Role::DevOps => "DevOps Engineer",
            Role::Analyst => "Analyst",
            Role::Admin => "Administrator",
            Role::Compliance => "Compliance Officer",
        }
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_value("role", s))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
