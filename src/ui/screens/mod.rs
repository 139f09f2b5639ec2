//! UI screens for the application.

pub mod dashboard;
pub mod landing;
pub mod onboarding;
pub mod trainer;

pub use dashboard::{DashboardAction, DashboardScreen};
pub use landing::LandingScreen;
pub use onboarding::OnboardingScreen;
pub use trainer::{TrainerAction, TrainerScreen};

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Marketing landing screen
    #[default]
    Landing,
    /// Profile collection wizard
    Onboarding,
    /// Derived metrics dashboard
    Dashboard,
    /// AI posture trainer
    Trainer,
}
