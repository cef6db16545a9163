//! AttributeProfile value object - the completed onboarding result.

use super::{JobArea, Role, Task};
use crate::domain::foundation::ValidationError;

/// The completed (role, jobs, tasks) tuple driving all personalization.
///
/// Jobs and tasks are kept in the order they were selected, without
/// duplicates. A profile is only ever built complete; there is no way to
/// mutate one after construction, a new onboarding run replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeProfile {
    role: Role,
    jobs: Vec<JobArea>,
    tasks: Vec<Task>,
    completed: bool,
}

impl AttributeProfile {
    /// Creates a completed profile.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if no job or no task is given
    pub fn new(
        role: Role,
        jobs: impl IntoIterator<Item = JobArea>,
        tasks: impl IntoIterator<Item = Task>,
    ) -> Result<Self, ValidationError> {
        let jobs = dedupe(jobs);
        let tasks = dedupe(tasks);

        if jobs.is_empty() {
            return Err(ValidationError::empty_field("jobs"));
        }
        if tasks.is_empty() {
            return Err(ValidationError::empty_field("tasks"));
        }

        Ok(Self {
            role,
            jobs,
            tasks,
            completed: true,
        })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Selected job areas in selection order.
    pub fn jobs(&self) -> &[JobArea] {
        &self.jobs
    }

    /// Selected tasks in selection order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn has_job(&self, job: JobArea) -> bool {
        self.jobs.contains(&job)
    }

    pub fn has_task(&self, task: Task) -> bool {
        self.tasks.contains(&task)
    }
}

/// Keeps the first occurrence of every value, in order.
fn dedupe<T: PartialEq>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
