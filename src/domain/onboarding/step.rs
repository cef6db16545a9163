//! WizardStep state machine for the onboarding flow.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Steps of the onboarding wizard.
///
/// Linear: Role -> Jobs -> Tasks -> Completed. No step can be skipped or
/// revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Role,
    Jobs,
    Tasks,
    Completed,
}

impl WizardStep {
    /// Number of steps that collect input.
    pub const INPUT_STEPS: usize = 3;

    /// 1-based position among the input steps; `Completed` reports the last.
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Role => 1,
            WizardStep::Jobs => 2,
            WizardStep::Tasks | WizardStep::Completed => 3,
        }
    }

    /// The step that follows this one, if any.
    pub fn next(&self) -> Option<WizardStep> {
        self.valid_transitions().first().copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Role => "What is your role?",
            WizardStep::Jobs => "What do you want to get done?",
            WizardStep::Tasks => "Which tasks are you working on?",
            WizardStep::Completed => "You're all set",
        }
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Role, Jobs) | (Jobs, Tasks) | (Tasks, Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Role => vec![Jobs],
            Jobs => vec![Tasks],
            Tasks => vec![Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStep::Role => "Role",
            WizardStep::Jobs => "Jobs",
            WizardStep::Tasks => "Tasks",
            WizardStep::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_role() {
        assert_eq!(WizardStep::default(), WizardStep::Role);
    }

    #[test]
    fn steps_advance_linearly() {
        assert_eq!(WizardStep::Role.next(), Some(WizardStep::Jobs));
        assert_eq!(WizardStep::Jobs.next(), Some(WizardStep::Tasks));
        assert_eq!(WizardStep::Tasks.next(), Some(WizardStep::Completed));
        assert_eq!(WizardStep::Completed.next(), None);
    }

    #[test]
    fn cannot_skip_a_step() {
        assert!(!WizardStep::Role.can_transition_to(&WizardStep::Tasks));
        assert!(!WizardStep::Jobs.can_transition_to(&WizardStep::Completed));
    }

    #[test]
    fn cannot_go_back() {
        assert!(!WizardStep::Tasks.can_transition_to(&WizardStep::Jobs));
        assert!(!WizardStep::Completed.can_transition_to(&WizardStep::Role));
    }

    #[test]
    fn only_completed_is_terminal() {
        assert!(WizardStep::Completed.is_terminal());
        assert!(!WizardStep::Role.is_terminal());
        assert!(!WizardStep::Jobs.is_terminal());
        assert!(!WizardStep::Tasks.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for step in [
            WizardStep::Role,
            WizardStep::Jobs,
            WizardStep::Tasks,
            WizardStep::Completed,
        ] {
            for target in step.valid_transitions() {
                assert!(step.can_transition_to(&target));
            }
        }
    }

    #[test]
    fn numbers_count_input_steps() {
        assert_eq!(WizardStep::Role.number(), 1);
        assert_eq!(WizardStep::Tasks.number(), WizardStep::INPUT_STEPS);
    }

    #[test]
    fn every_step_has_a_title() {
        assert_eq!(WizardStep::Role.title(), "What is your role?");
        assert_eq!(WizardStep::Completed.title(), "You're all set");
    }
}
