//! Onboarding wizard steps.

use serde::{Deserialize, Serialize};

/// Steps in the onboarding wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OnboardingStep {
    /// Welcome screen with overview
    #[default]
    Welcome,
    /// Name, age and gender
    PersonalInfo,
    /// Height and weight
    BodyMetrics,
    /// Daily routine and food preferences
    Lifestyle,
    /// Primary fitness goal
    Goals,
    /// Completion screen
    Complete,
}

impl OnboardingStep {
    /// Get all steps in order.
    pub fn all() -> &'static [OnboardingStep] {
        &[
            OnboardingStep::Welcome,
            OnboardingStep::PersonalInfo,
            OnboardingStep::BodyMetrics,
            OnboardingStep::Lifestyle,
            OnboardingStep::Goals,
            OnboardingStep::Complete,
        ]
    }

    /// Get the step index (0-based).
    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    /// Get the next step, if any.
    pub fn next(&self) -> Option<OnboardingStep> {
        let steps = Self::all();
        let idx = self.index();
        if idx + 1 < steps.len() {
            Some(steps[idx + 1])
        } else {
            None
        }
    }

    /// Get the previous step, if any.
    pub fn previous(&self) -> Option<OnboardingStep> {
        let steps = Self::all();
        let idx = self.index();
        if idx > 0 {
            Some(steps[idx - 1])
        } else {
            None
        }
    }

    /// Get the title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "Welcome to FitForm",
            OnboardingStep::PersonalInfo => "Personal Information",
            OnboardingStep::BodyMetrics => "Physical Details",
            OnboardingStep::Lifestyle => "Lifestyle & Preferences",
            OnboardingStep::Goals => "Fitness Goals",
            OnboardingStep::Complete => "All Set!",
        }
    }

    /// Get the description for this step.
    pub fn description(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "Let's build your personal coaching plan.",
            OnboardingStep::PersonalInfo => "Tell us who you are.",
            OnboardingStep::BodyMetrics => "Enter your height and weight.",
            OnboardingStep::Lifestyle => "How active are you, and how do you eat?",
            OnboardingStep::Goals => "Pick the goal your plan should optimize for.",
            OnboardingStep::Complete => "Your dashboard is ready.",
        }
    }

    /// Check if this is the first step.
    pub fn is_first(&self) -> bool {
        *self == OnboardingStep::Welcome
    }

    /// Check if this is the last step.
    pub fn is_last(&self) -> bool {
        *self == OnboardingStep::Complete
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
