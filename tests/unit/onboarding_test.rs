//! Unit tests for the onboarding wizard.

use fitform::onboarding::{OnboardingStep, OnboardingWizard, ProfileForm};
use fitform::profile::types::{ActivityLevel, DietPreference, FitnessGoal, Gender, ProfileError};

#[test]
fn test_step_order() {
    let steps = OnboardingStep::all();
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0], OnboardingStep::Welcome);
    assert_eq!(steps[5], OnboardingStep::Complete);

    assert_eq!(
        OnboardingStep::Welcome.next(),
        Some(OnboardingStep::PersonalInfo)
    );
    assert_eq!(
        OnboardingStep::PersonalInfo.previous(),
        Some(OnboardingStep::Welcome)
    );
    assert_eq!(OnboardingStep::Complete.next(), None);
    assert_eq!(OnboardingStep::Welcome.previous(), None);
}

#[test]
fn test_step_titles() {
    assert_eq!(OnboardingStep::PersonalInfo.title(), "Personal Information");
    assert_eq!(OnboardingStep::BodyMetrics.title(), "Physical Details");
    assert_eq!(OnboardingStep::Lifestyle.title(), "Lifestyle & Preferences");
    assert_eq!(OnboardingStep::Goals.title(), "Fitness Goals");
}

#[test]
fn test_first_and_last_flags() {
    assert!(OnboardingStep::Welcome.is_first());
    assert!(!OnboardingStep::Welcome.is_last());
    assert!(OnboardingStep::Complete.is_last());
}

#[test]
fn test_wizard_gates_on_step_validity() {
    let mut wizard = OnboardingWizard::new();

    // Welcome has no fields
    assert!(wizard.can_advance());
    assert!(wizard.next_step());

    // PersonalInfo requires name, age and gender
    assert!(!wizard.can_advance());
    assert!(!wizard.next_step());
    assert_eq!(wizard.current_step(), OnboardingStep::PersonalInfo);

    let form = wizard.form_mut();
    form.name = "Jamie".to_string();
    form.age = "35".to_string();
    assert!(!wizard.can_advance());

    wizard.form_mut().gender = Some(Gender::Other);
    assert!(wizard.can_advance());
}

#[test]
fn test_wizard_back_navigation() {
    let mut wizard = OnboardingWizard::new();
    assert!(wizard.next_step());
    wizard.previous_step();
    assert_eq!(wizard.current_step(), OnboardingStep::Welcome);

    // Backing off the first step stays put
    wizard.previous_step();
    assert_eq!(wizard.current_step(), OnboardingStep::Welcome);
}

#[test]
fn test_progress_reaches_100_at_completion() {
    let mut wizard = OnboardingWizard::new();
    assert_eq!(wizard.state().progress_percent(), 0);

    let form = wizard.form_mut();
    form.name = "Jamie".to_string();
    form.age = "35".to_string();
    form.height_cm = "182".to_string();
    form.weight_kg = "88".to_string();
    form.gender = Some(Gender::Male);
    form.activity_level = Some(ActivityLevel::VeryActive);
    form.diet_preference = Some(DietPreference::Keto);
    form.fitness_goal = Some(FitnessGoal::ImproveEndurance);

    while !wizard.state().completed {
        assert!(wizard.next_step());
    }
    assert_eq!(wizard.state().progress_percent(), 100);
}

#[test]
fn test_restart_discards_fields() {
    let mut wizard = OnboardingWizard::new();
    wizard.form_mut().name = "Jamie".to_string();
    assert!(wizard.next_step());

    wizard.restart();
    assert_eq!(wizard.current_step(), OnboardingStep::Welcome);
    assert!(wizard.form().name.is_empty());
}

#[test]
fn test_form_rejects_whitespace_name() {
    let mut form = ProfileForm::new();
    form.name = "   ".to_string();
    form.age = "30".to_string();
    form.gender = Some(Gender::Female);
    assert!(!form.is_step_valid(OnboardingStep::PersonalInfo));
    assert_eq!(form.build(), Err(ProfileError::EmptyName));
}

#[test]
fn test_form_accepts_fractional_height_and_weight() {
    let mut form = ProfileForm::new();
    form.height_cm = "172.5".to_string();
    form.weight_kg = "64.3".to_string();
    assert!(form.is_step_valid(OnboardingStep::BodyMetrics));
}

#[test]
fn test_form_build_requires_every_selection() {
    let mut form = ProfileForm::new();
    form.name = "Jamie".to_string();
    form.age = "35".to_string();
    form.height_cm = "182".to_string();
    form.weight_kg = "88".to_string();
    form.gender = Some(Gender::Male);
    form.activity_level = Some(ActivityLevel::Sedentary);
    form.diet_preference = Some(DietPreference::Vegan);

    assert_eq!(
        form.build(),
        Err(ProfileError::MissingSelection("fitness goal"))
    );

    form.fitness_goal = Some(FitnessGoal::GainMuscle);
    let profile = form.build().unwrap();
    assert_eq!(profile.fitness_goal, FitnessGoal::GainMuscle);
    assert_eq!(profile.height_cm, 182.0);
}
