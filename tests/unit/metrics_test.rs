//! Unit tests for the derived-metrics engine.

use fitform::metrics::engine::{
    bmi, daily_calories, ideal_weight_kg, water_intake_ml, BmiCategory,
};
use fitform::profile::types::{ActivityLevel, Gender};

#[test]
fn test_bmi_matches_formula() {
    for (height, weight) in [(175.0, 70.0), (160.0, 50.0), (190.0, 95.0)] {
        let expected = weight / ((height / 100.0) * (height / 100.0));
        assert_eq!(bmi(height, weight), expected);
        assert!(bmi(height, weight) >= 0.0);
    }
}

#[test]
fn test_bmi_zero_height_has_no_guard() {
    assert!(bmi(0.0, 70.0).is_infinite());
}

#[test]
fn test_bmi_category_boundaries() {
    // Bands are half-open and contiguous
    assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
}

#[test]
fn test_bmi_category_display_names() {
    assert_eq!(BmiCategory::Underweight.display_name(), "Underweight");
    assert_eq!(BmiCategory::Normal.display_name(), "Normal");
    assert_eq!(BmiCategory::Overweight.display_name(), "Overweight");
    assert_eq!(BmiCategory::Obese.display_name(), "Obese");
}

#[test]
fn test_daily_calories_male_sedentary() {
    // bmr = 88.362 + 13.397*70 + 4.799*175 - 5.677*30 = 1695.667, x1.2
    assert_eq!(
        daily_calories(70.0, 175.0, 30, Gender::Male, ActivityLevel::Sedentary),
        2035
    );
}

#[test]
fn test_daily_calories_female_moderately_active() {
    // bmr = 447.593 + 9.247*60 + 3.098*165 - 4.330*25 = 1405.333, x1.55
    assert_eq!(
        daily_calories(60.0, 165.0, 25, Gender::Female, ActivityLevel::ModeratelyActive),
        2178
    );
}

#[test]
fn test_daily_calories_other_gender_shares_female_equation() {
    assert_eq!(
        daily_calories(75.0, 180.0, 40, Gender::Other, ActivityLevel::VeryActive),
        daily_calories(75.0, 180.0, 40, Gender::Female, ActivityLevel::VeryActive),
    );
}

#[test]
fn test_daily_calories_monotonic_in_activity() {
    let mut previous = 0;
    for level in ActivityLevel::all() {
        let calories = daily_calories(80.0, 180.0, 40, Gender::Male, *level);
        assert!(
            calories >= previous,
            "{level} should not burn fewer calories than the level below it"
        );
        previous = calories;
    }
}

#[test]
fn test_engine_functions_are_idempotent() {
    let first = daily_calories(70.0, 175.0, 30, Gender::Male, ActivityLevel::LightlyActive);
    let second = daily_calories(70.0, 175.0, 30, Gender::Male, ActivityLevel::LightlyActive);
    assert_eq!(first, second);

    assert_eq!(bmi(175.0, 70.0).to_bits(), bmi(175.0, 70.0).to_bits());
}

#[test]
fn test_ideal_weight() {
    // 175 cm = 68.898 in; male: 50 + 2.3*(68.898-60) = 70.46
    assert_eq!(ideal_weight_kg(175.0, Gender::Male), 70);
    // 165 cm = 64.961 in; female: 45.5 + 2.3*(64.961-60) = 56.91
    assert_eq!(ideal_weight_kg(165.0, Gender::Female), 57);
    assert_eq!(
        ideal_weight_kg(180.0, Gender::Other),
        ideal_weight_kg(180.0, Gender::Female)
    );
}

#[test]
fn test_water_intake() {
    // 70 kg x 35 ml = 2450 ml base
    assert_eq!(water_intake_ml(70.0, ActivityLevel::Sedentary), 2450);
    assert_eq!(water_intake_ml(70.0, ActivityLevel::VeryActive), 3185);
    // 60 kg x 35 x 1.2
    assert_eq!(water_intake_ml(60.0, ActivityLevel::ModeratelyActive), 2520);
}
