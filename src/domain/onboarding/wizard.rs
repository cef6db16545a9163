//! OnboardingWizard - collects role, jobs, and tasks into a profile.
//!
//! The wizard owns the transient selection state. It hands out an
//! [`AttributeProfile`] only once, on completion, and never exposes a
//! partially-filled one.

use super::WizardStep;
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};
use crate::domain::profile::{AttributeProfile, JobArea, Role, Task};

/// Single-writer state object for one onboarding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingWizard {
    step: WizardStep,
    role: Option<Role>,
    jobs: Vec<JobArea>,
    tasks: Vec<Task>,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn jobs(&self) -> &[JobArea] {
        &self.jobs
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// (current step number, number of input steps).
    pub fn progress(&self) -> (usize, usize) {
        (self.step.number(), WizardStep::INPUT_STEPS)
    }

    /// Tasks selectable in the task step: those whose category was chosen.
    pub fn available_tasks(&self) -> Vec<Task> {
        Task::in_categories(&self.jobs)
    }

    /// Whether the current step's guard is satisfied.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Role => self.role.is_some(),
            WizardStep::Jobs => !self.jobs.is_empty(),
            WizardStep::Tasks => !self.tasks.is_empty(),
            WizardStep::Completed => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selections
    // ─────────────────────────────────────────────────────────────────────────

    /// Chooses the role, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// - `WizardCompleted` if the run has finished
    /// - `InvalidStateTransition` if the wizard is past the role step
    pub fn select_role(&mut self, role: Role) -> Result<(), DomainError> {
        self.ensure_step(WizardStep::Role)?;
        self.role = Some(role);
        Ok(())
    }

    /// Adds or removes a job; returns whether it is now selected.
    ///
    /// # Errors
    ///
    /// - `WizardCompleted` if the run has finished
    /// - `InvalidStateTransition` if the wizard is not on the jobs step
    pub fn toggle_job(&mut self, job: JobArea) -> Result<bool, DomainError> {
        self.ensure_step(WizardStep::Jobs)?;
        Ok(toggle(&mut self.jobs, job))
    }

    /// Adds or removes a task; returns whether it is now selected.
    ///
    /// # Errors
    ///
    /// - `WizardCompleted` if the run has finished
    /// - `InvalidStateTransition` if the wizard is not on the tasks step
    /// - `TaskOutsideSelectedJobs` if the task's category was not chosen
    pub fn toggle_task(&mut self, task: Task) -> Result<bool, DomainError> {
        self.ensure_step(WizardStep::Tasks)?;
        if !self.jobs.contains(&task.category()) {
            return Err(DomainError::new(
                ErrorCode::TaskOutsideSelectedJobs,
                format!("Task '{}' is not part of the selected job areas", task.as_str()),
            )
            .with_detail("task", task.as_str())
            .with_detail("category", task.category().as_str()));
        }
        Ok(toggle(&mut self.tasks, task))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves from the role step to jobs, or from jobs to tasks.
    ///
    /// # Errors
    ///
    /// - `StepIncomplete` if the current step's guard is not met
    /// - `InvalidStateTransition` on the tasks step, which ends with [`complete`](Self::complete)
    /// - `WizardCompleted` if the run has finished
    pub fn advance(&mut self) -> Result<WizardStep, DomainError> {
        match self.step {
            WizardStep::Completed => return Err(completed_error()),
            WizardStep::Tasks => {
                return Err(DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    "The task step finishes with complete()",
                ))
            }
            WizardStep::Role | WizardStep::Jobs => {}
        }
        self.ensure_can_advance()?;
        self.transition()
    }

    /// Finishes the task step and returns the completed profile.
    ///
    /// # Errors
    ///
    /// - `StepIncomplete` if no task is selected
    /// - `InvalidStateTransition` if the wizard is not on the tasks step
    /// - `WizardCompleted` if the run has already finished
    pub fn complete(&mut self) -> Result<AttributeProfile, DomainError> {
        self.ensure_step(WizardStep::Tasks)?;
        self.ensure_can_advance()?;

        let role = self.role.ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Role missing at task step")
        })?;
        let profile = AttributeProfile::new(role, self.jobs.clone(), self.tasks.clone())?;

        self.transition()?;
        Ok(profile)
    }

    /// Discards every selection and returns to the role step.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn transition(&mut self) -> Result<WizardStep, DomainError> {
        let next = self.step.next().ok_or_else(completed_error)?;
        self.step = self.step.transition_to(next).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
        })?;
        Ok(self.step)
    }

    fn ensure_step(&self, expected: WizardStep) -> Result<(), DomainError> {
        if self.step == WizardStep::Completed {
            return Err(completed_error());
        }
        if self.step != expected {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Expected step {} but wizard is on {}", expected, self.step),
            ));
        }
        Ok(())
    }

    fn ensure_can_advance(&self) -> Result<(), DomainError> {
        if self.can_advance() {
            return Ok(());
        }
        let message = match self.step {
            WizardStep::Role => "Choose a role to continue",
            WizardStep::Jobs => "Choose at least one job area to continue",
            WizardStep::Tasks => "Choose at least one task to continue",
            WizardStep::Completed => return Err(completed_error()),
        };
        Err(DomainError::new(ErrorCode::StepIncomplete, message))
    }
}

fn completed_error() -> DomainError {
    DomainError::new(ErrorCode::WizardCompleted, "Onboarding is already complete")
}

fn toggle<T: PartialEq>(selected: &mut Vec<T>, value: T) -> bool {
    if let Some(index) = selected.iter().position(|v| *v == value) {
        selected.remove(index);
        false
    } else {
        selected.push(value);
        true
    }
}
