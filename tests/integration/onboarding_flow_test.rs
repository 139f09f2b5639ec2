//! End-to-end flow: onboarding wizard -> profile store -> health summary.

use fitform::metrics::engine::{BmiCategory, HealthSummary};
use fitform::onboarding::{OnboardingStep, OnboardingWizard};
use fitform::profile::types::{ActivityLevel, DietPreference, FitnessGoal, Gender};
use fitform::profile::ProfileStore;

/// Walk the wizard exactly as the screen would: fill each step's fields,
/// then advance.
fn complete_onboarding() -> OnboardingWizard {
    let mut wizard = OnboardingWizard::new();
    assert!(wizard.next_step()); // Welcome

    let form = wizard.form_mut();
    form.name = "Jordan".to_string();
    form.age = "30".to_string();
    form.gender = Some(Gender::Male);
    assert!(wizard.next_step()); // PersonalInfo

    let form = wizard.form_mut();
    form.height_cm = "175".to_string();
    form.weight_kg = "70".to_string();
    assert!(wizard.next_step()); // BodyMetrics

    let form = wizard.form_mut();
    form.activity_level = Some(ActivityLevel::ModeratelyActive);
    form.diet_preference = Some(DietPreference::NoPreference);
    assert!(wizard.next_step()); // Lifestyle

    wizard.form_mut().fitness_goal = Some(FitnessGoal::GainMuscle);
    assert!(wizard.next_step()); // Goals

    assert_eq!(wizard.current_step(), OnboardingStep::Complete);
    wizard
}

#[test]
fn test_completed_onboarding_feeds_the_dashboard() {
    let wizard = complete_onboarding();
    let profile = wizard.finish().unwrap();

    // The dashboard contract: absent profile means redirect, so the
    // store must be empty until onboarding hands the profile over.
    let mut store = ProfileStore::new();
    assert!(store.get().is_none());

    store.set(profile);
    let profile = store.get().unwrap();

    let summary = HealthSummary::for_profile(profile);

    // bmi = 70 / 1.75^2 = 22.86
    assert!((summary.bmi - 22.857).abs() < 0.01);
    assert_eq!(summary.bmi_category, BmiCategory::Normal);
    // bmr = 1695.667, x1.55 for Moderately Active
    assert_eq!(summary.daily_calories, 2628);
    assert_eq!(summary.ideal_weight_kg, 70);
    // 70 x 35 x 1.2
    assert_eq!(summary.water_intake_ml, 2940);
    // gain-muscle bundle
    assert_eq!(summary.recommendation.macros.protein, 35);
    assert_eq!(summary.recommendation.tips.len(), 6);
}

#[test]
fn test_summary_is_a_pure_projection() {
    let profile = complete_onboarding().finish().unwrap();

    let first = HealthSummary::for_profile(&profile);
    let second = HealthSummary::for_profile(&profile);

    assert_eq!(first.bmi.to_bits(), second.bmi.to_bits());
    assert_eq!(first.daily_calories, second.daily_calories);
    assert_eq!(first.ideal_weight_kg, second.ideal_weight_kg);
    assert_eq!(first.water_intake_ml, second.water_intake_ml);
    assert!(std::ptr::eq(first.recommendation, second.recommendation));
}

#[test]
fn test_redoing_onboarding_replaces_the_profile() {
    let mut store = ProfileStore::new();
    store.set(complete_onboarding().finish().unwrap());

    // Second run with different answers fully replaces the first profile
    let mut wizard = OnboardingWizard::new();
    assert!(wizard.next_step());
    let form = wizard.form_mut();
    form.name = "Riley".to_string();
    form.age = "25".to_string();
    form.gender = Some(Gender::Female);
    assert!(wizard.next_step());
    let form = wizard.form_mut();
    form.height_cm = "165".to_string();
    form.weight_kg = "60".to_string();
    assert!(wizard.next_step());
    let form = wizard.form_mut();
    form.activity_level = Some(ActivityLevel::ModeratelyActive);
    form.diet_preference = Some(DietPreference::Vegan);
    assert!(wizard.next_step());
    wizard.form_mut().fitness_goal = Some(FitnessGoal::LoseWeight);
    assert!(wizard.next_step());

    store.set(wizard.finish().unwrap());

    let profile = store.get().unwrap();
    assert_eq!(profile.name, "Riley");

    let summary = HealthSummary::for_profile(profile);
    assert_eq!(summary.daily_calories, 2178);
    assert_eq!(summary.recommendation.macros.protein, 30);

    // Clearing returns the session to the pre-onboarding state
    store.clear();
    assert!(store.get().is_none());
}
