//! Derived health metrics.
//!
//! Every function here is pure and total: same input, same output, no
//! side effects. Inputs are not range-checked -- validation happens once
//! at the onboarding boundary, so out-of-range values propagate as
//! degenerate math (a zero height yields an infinite BMI) rather than
//! as errors.

use serde::{Deserialize, Serialize};

use crate::metrics::recommendations::{recommendation_for, Recommendation};
use crate::profile::types::{ActivityLevel, Gender, Profile};

/// Body Mass Index: weight (kg) / height (m) squared.
///
/// Known edge case: `height_cm == 0` produces `inf` since there is no
/// internal guard against division by zero.
pub fn bmi(height_cm: f32, weight_kg: f32) -> f32 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. Bands are half-open and contiguous;
    /// the first match wins.
    pub fn from_bmi(bmi: f32) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Estimated total daily energy expenditure in kcal.
///
/// Basal metabolic rate via the historic Harris-Benedict equations,
/// scaled by the activity multiplier and rounded to the nearest integer.
/// Only `Gender::Male` selects the male equation; `Female` and `Other`
/// share the second one.
pub fn daily_calories(
    weight_kg: f32,
    height_cm: f32,
    age: u8,
    gender: Gender,
    activity_level: ActivityLevel,
) -> u32 {
    let weight = f64::from(weight_kg);
    let height = f64::from(height_cm);
    let age = f64::from(age);

    let bmr = match gender {
        Gender::Male => 88.362 + 13.397 * weight + 4.799 * height - 5.677 * age,
        Gender::Female | Gender::Other => {
            447.593 + 9.247 * weight + 3.098 * height - 4.330 * age
        }
    };

    (bmr * activity_level.calorie_multiplier()).round() as u32
}

/// Ideal body weight estimate in kg (Devine-style, from height in inches).
pub fn ideal_weight_kg(height_cm: f32, gender: Gender) -> u32 {
    let height_in = f64::from(height_cm) / 2.54;

    let ideal = match gender {
        Gender::Male => 50.0 + 2.3 * (height_in - 60.0),
        Gender::Female | Gender::Other => 45.5 + 2.3 * (height_in - 60.0),
    };

    ideal.round() as u32
}

/// Recommended daily water intake in milliliters.
///
/// Base intake of 35 ml per kg of body weight, scaled by the activity
/// level's hydration factor.
pub fn water_intake_ml(weight_kg: f32, activity_level: ActivityLevel) -> u32 {
    let base = f64::from(weight_kg) * 35.0;
    (base * activity_level.hydration_factor()).round() as u32
}

/// The full set of figures the dashboard renders for a profile.
///
/// A pure projection: recomputed on every read, never stored.
#[derive(Debug, Clone)]
pub struct HealthSummary {
    /// Body Mass Index
    pub bmi: f32,
    /// BMI classification
    pub bmi_category: BmiCategory,
    /// Estimated daily calorie target in kcal
    pub daily_calories: u32,
    /// Ideal body weight estimate in kg
    pub ideal_weight_kg: u32,
    /// Recommended daily water intake in ml
    pub water_intake_ml: u32,
    /// Goal-based recommendation bundle
    pub recommendation: &'static Recommendation,
}

impl HealthSummary {
    /// Derive the summary from a profile.
    pub fn for_profile(profile: &Profile) -> Self {
        let bmi_value = bmi(profile.height_cm, profile.weight_kg);

        Self {
            bmi: bmi_value,
            bmi_category: BmiCategory::from_bmi(bmi_value),
            daily_calories: daily_calories(
                profile.weight_kg,
                profile.height_cm,
                profile.age,
                profile.gender,
                profile.activity_level,
            ),
            ideal_weight_kg: ideal_weight_kg(profile.height_cm, profile.gender),
            water_intake_ml: water_intake_ml(profile.weight_kg, profile.activity_level),
            recommendation: recommendation_for(profile.fitness_goal),
        }
    }
}
