//! Storage-boundary shape of the onboarding profile.
//!
//! The persisted JSON uses the field name `job` (singular) for the job area
//! list. Clients already hold records in this shape, so it must not change.

use serde::{Deserialize, Serialize};

use super::{AttributeProfile, JobArea, Role, Task};
use crate::domain::foundation::ValidationError;

/// Raw profile record as written to client-local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub role: String,
    pub job: Vec<String>,
    pub tasks: Vec<String>,
    pub completed: bool,
}

impl StoredProfile {
    /// Converts the raw record into a typed profile.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the record is not marked completed
    /// - `UnknownValue` if any role, job, or task identifier is not recognised
    /// - `EmptyField` if the job or task list is empty
    pub fn into_profile(self) -> Result<AttributeProfile, ValidationError> {
        if !self.completed {
            return Err(ValidationError::invalid_format(
                "completed",
                "onboarding was not completed",
            ));
        }

        let role: Role = self.role.parse()?;
        let jobs = self
            .job
            .iter()
            .map(|s| s.parse::<JobArea>())
            .collect::<Result<Vec<_>, _>>()?;
        let tasks = self
            .tasks
            .iter()
            .map(|s| s.parse::<Task>())
            .collect::<Result<Vec<_>, _>>()?;

        AttributeProfile::new(role, jobs, tasks)
    }
}

impl From<&AttributeProfile> for StoredProfile {
    fn from(profile: &AttributeProfile) -> Self {
        Self {
            role: profile.role().as_str().to_string(),
            job: profile.jobs().iter().map(|j| j.as_str().to_string()).collect(),
            tasks: profile.tasks().iter().map(|t| t.as_str().to_string()).collect(),
            completed: profile.is_completed(),
        }
    }
}
