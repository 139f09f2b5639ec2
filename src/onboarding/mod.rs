//! Onboarding wizard for first-time profile collection.
//!
//! A guided multi-step flow that gathers the profile field-by-field,
//! validates each step before allowing the user to advance, and builds
//! the finished [`Profile`](crate::profile::Profile) on completion.

pub mod form;
pub mod steps;

use serde::{Deserialize, Serialize};

pub use form::ProfileForm;
pub use steps::OnboardingStep;

use crate::profile::types::{Profile, ProfileError};

/// State of the onboarding wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingState {
    /// Whether onboarding has been completed
    pub completed: bool,
    /// Current step in the wizard
    pub current_step: OnboardingStep,
    /// Steps that have been completed
    pub completed_steps: Vec<OnboardingStep>,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            completed: false,
            current_step: OnboardingStep::Welcome,
            completed_steps: Vec::new(),
        }
    }
}

impl OnboardingState {
    /// Mark the current step as complete and advance.
    pub fn complete_current_step(&mut self) {
        if !self.completed_steps.contains(&self.current_step) {
            self.completed_steps.push(self.current_step);
        }

        if let Some(next) = self.current_step.next() {
            self.current_step = next;
        } else {
            self.completed = true;
        }
    }

    /// Go back to the previous step.
    pub fn go_back(&mut self) {
        if let Some(prev) = self.current_step.previous() {
            self.current_step = prev;
        }
    }

    /// Get progress as a percentage (0-100).
    pub fn progress_percent(&self) -> u8 {
        let total = OnboardingStep::all().len();
        let completed = self.completed_steps.len();
        ((completed * 100) / total) as u8
    }
}

/// Onboarding wizard controller.
#[derive(Debug, Default)]
pub struct OnboardingWizard {
    /// Current state
    state: OnboardingState,
    /// Draft profile being collected
    form: ProfileForm,
}

impl OnboardingWizard {
    /// Create a new onboarding wizard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state.
    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    /// Get the current step.
    pub fn current_step(&self) -> OnboardingStep {
        self.state.current_step
    }

    /// Get the draft form.
    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    /// Get the draft form for editing.
    pub fn form_mut(&mut self) -> &mut ProfileForm {
        &mut self.form
    }

    /// Whether the current step's fields are valid, enabling Next.
    pub fn can_advance(&self) -> bool {
        self.form.is_step_valid(self.state.current_step)
    }

    /// Advance to the next step if the current one validates.
    ///
    /// Returns whether the wizard actually moved.
    pub fn next_step(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.state.complete_current_step();
        true
    }

    /// Go back to the previous step.
    pub fn previous_step(&mut self) {
        self.state.go_back();
    }

    /// Restart the wizard, discarding collected fields.
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// Build the finished profile from the collected fields.
    pub fn finish(&self) -> Result<Profile, ProfileError> {
        let profile = self.form.build()?;
        tracing::info!(name = %profile.name, goal = %profile.fitness_goal, "onboarding complete");
        Ok(profile)
    }
}
