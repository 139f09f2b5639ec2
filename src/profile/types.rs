//! User profile data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Valid age range in years.
pub const AGE_RANGE: std::ops::RangeInclusive<u8> = 1..=120;
/// Valid height range in centimeters.
pub const HEIGHT_RANGE: std::ops::RangeInclusive<f32> = 50.0..=300.0;
/// Valid weight range in kilograms.
pub const WEIGHT_RANGE: std::ops::RangeInclusive<f32> = 20.0..=500.0;

/// Gender as entered during onboarding.
///
/// Only `Male` selects the male Harris-Benedict formula; `Female` and
/// `Other` share the second formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    /// Parse a free-form label, case-insensitively.
    ///
    /// Anything that is not recognizably male or female maps to `Other`,
    /// which shares the female calorie formula.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        }
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// All selectable values, in onboarding display order.
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female, Gender::Other]
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Self-reported daily activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little to no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days per week
    LightlyActive,
    /// Moderate exercise 3-5 days per week
    ModeratelyActive,
    /// Hard exercise 6-7 days per week
    VeryActive,
    /// Very hard exercise and a physical job
    ExtremelyActive,
}

impl ActivityLevel {
    /// All levels, ordered from least to most active.
    pub fn all() -> &'static [ActivityLevel] {
        &[
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtremelyActive,
        ]
    }

    /// Parse a display label; unrecognized labels fall back to `Sedentary`.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Sedentary" => ActivityLevel::Sedentary,
            "Lightly Active" => ActivityLevel::LightlyActive,
            "Moderately Active" => ActivityLevel::ModeratelyActive,
            "Very Active" => ActivityLevel::VeryActive,
            "Extremely Active" => ActivityLevel::ExtremelyActive,
            _ => ActivityLevel::Sedentary,
        }
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtremelyActive => "Extremely Active",
        }
    }

    /// Multiplier applied to BMR to estimate total daily energy expenditure.
    pub fn calorie_multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }

    /// Multiplier applied to the base water intake recommendation.
    pub fn hydration_factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.0,
            ActivityLevel::LightlyActive => 1.1,
            ActivityLevel::ModeratelyActive => 1.2,
            ActivityLevel::VeryActive => 1.3,
            ActivityLevel::ExtremelyActive => 1.4,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Dietary preference. Collected and displayed, never fed into a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietPreference {
    Vegetarian,
    Vegan,
    Keto,
    Paleo,
    Mediterranean,
    #[default]
    NoPreference,
}

impl DietPreference {
    /// All preferences, in onboarding display order.
    pub fn all() -> &'static [DietPreference] {
        &[
            DietPreference::Vegetarian,
            DietPreference::Vegan,
            DietPreference::Keto,
            DietPreference::Paleo,
            DietPreference::Mediterranean,
            DietPreference::NoPreference,
        ]
    }

    /// Parse a display label; unrecognized labels fall back to `NoPreference`.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Vegetarian" => DietPreference::Vegetarian,
            "Vegan" => DietPreference::Vegan,
            "Keto" => DietPreference::Keto,
            "Paleo" => DietPreference::Paleo,
            "Mediterranean" => DietPreference::Mediterranean,
            _ => DietPreference::NoPreference,
        }
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "Vegetarian",
            DietPreference::Vegan => "Vegan",
            DietPreference::Keto => "Keto",
            DietPreference::Paleo => "Paleo",
            DietPreference::Mediterranean => "Mediterranean",
            DietPreference::NoPreference => "No Preference",
        }
    }
}

impl std::fmt::Display for DietPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Primary fitness goal selected during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Burn fat and achieve a leaner physique
    LoseWeight,
    /// Build strength and muscle mass
    GainMuscle,
    /// Maintain current fitness and health
    #[default]
    StayFit,
    /// Enhance cardiovascular fitness
    ImproveEndurance,
}

impl FitnessGoal {
    /// All goals, in onboarding display order.
    pub fn all() -> &'static [FitnessGoal] {
        &[
            FitnessGoal::LoseWeight,
            FitnessGoal::GainMuscle,
            FitnessGoal::StayFit,
            FitnessGoal::ImproveEndurance,
        ]
    }

    /// Parse a kebab-case goal label; unrecognized labels fall back to `StayFit`.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "lose-weight" => FitnessGoal::LoseWeight,
            "gain-muscle" => FitnessGoal::GainMuscle,
            "stay-fit" => FitnessGoal::StayFit,
            "improve-endurance" => FitnessGoal::ImproveEndurance,
            _ => FitnessGoal::StayFit,
        }
    }

    /// The kebab-case wire label for this goal.
    pub fn label(&self) -> &'static str {
        match self {
            FitnessGoal::LoseWeight => "lose-weight",
            FitnessGoal::GainMuscle => "gain-muscle",
            FitnessGoal::StayFit => "stay-fit",
            FitnessGoal::ImproveEndurance => "improve-endurance",
        }
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            FitnessGoal::LoseWeight => "Lose Weight",
            FitnessGoal::GainMuscle => "Gain Muscle",
            FitnessGoal::StayFit => "Stay Fit",
            FitnessGoal::ImproveEndurance => "Improve Endurance",
        }
    }

    /// One-line description shown on the goal picker.
    pub fn description(&self) -> &'static str {
        match self {
            FitnessGoal::LoseWeight => "Burn fat and achieve a leaner physique",
            FitnessGoal::GainMuscle => "Build strength and muscle mass",
            FitnessGoal::StayFit => "Maintain current fitness and health",
            FitnessGoal::ImproveEndurance => "Enhance cardiovascular fitness",
        }
    }
}

impl std::fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A complete user profile, created once per session by onboarding.
///
/// Immutable after creation except by full replacement or clearing
/// through the [`ProfileStore`](super::store::ProfileStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Age in years (1-120)
    pub age: u8,
    /// Height in centimeters (50-300)
    pub height_cm: f32,
    /// Weight in kilograms (20-500)
    pub weight_kg: f32,
    /// Gender
    pub gender: Gender,
    /// Self-reported daily activity level
    pub activity_level: ActivityLevel,
    /// Dietary preference
    pub diet_preference: DietPreference,
    /// Primary fitness goal
    pub fitness_goal: FitnessGoal,
    /// Profile creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Validate age (1-120 years).
    pub fn validate_age(age: u8) -> bool {
        AGE_RANGE.contains(&age)
    }

    /// Validate height (50-300 cm).
    pub fn validate_height(height_cm: f32) -> bool {
        HEIGHT_RANGE.contains(&height_cm)
    }

    /// Validate weight (20-500 kg).
    pub fn validate_weight(weight_kg: f32) -> bool {
        WEIGHT_RANGE.contains(&weight_kg)
    }

    /// Check every field against its domain.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if !Self::validate_age(self.age) {
            return Err(ProfileError::AgeOutOfRange(self.age));
        }
        if !Self::validate_height(self.height_cm) {
            return Err(ProfileError::HeightOutOfRange(self.height_cm));
        }
        if !Self::validate_weight(self.weight_kg) {
            return Err(ProfileError::WeightOutOfRange(self.weight_kg));
        }
        Ok(())
    }
}

/// Profile validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("age must be between 1 and 120 years, got {0}")]
    AgeOutOfRange(u8),

    #[error("age is not a whole number of years: {0}")]
    InvalidAge(String),

    #[error("height must be between 50 and 300 cm, got {0}")]
    HeightOutOfRange(f32),

    #[error("height is not a number: {0}")]
    InvalidHeight(String),

    #[error("weight must be between 20 and 500 kg, got {0}")]
    WeightOutOfRange(f32),

    #[error("weight is not a number: {0}")]
    InvalidWeight(String),

    #[error("no {0} selected")]
    MissingSelection(&'static str),
}
