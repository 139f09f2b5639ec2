//! Draft profile state collected by the onboarding wizard.

use chrono::Utc;
use uuid::Uuid;

use super::steps::OnboardingStep;
use crate::profile::types::{
    ActivityLevel, DietPreference, FitnessGoal, Gender, Profile, ProfileError,
};

/// Field-by-field draft of a profile.
///
/// Numeric fields are kept as the raw text the user typed and only
/// parsed on validation, so partially-entered input never panics or
/// snaps to a bogus value.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    /// Display name
    pub name: String,
    /// Age text field
    pub age: String,
    /// Height text field, centimeters
    pub height_cm: String,
    /// Weight text field, kilograms
    pub weight_kg: String,
    /// Selected gender
    pub gender: Option<Gender>,
    /// Selected daily routine
    pub activity_level: Option<ActivityLevel>,
    /// Selected food preference
    pub diet_preference: Option<DietPreference>,
    /// Selected fitness goal
    pub fitness_goal: Option<FitnessGoal>,
}

impl ProfileForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    fn parsed_age(&self) -> Result<u8, ProfileError> {
        let age: u8 = self
            .age
            .trim()
            .parse()
            .map_err(|_| ProfileError::InvalidAge(self.age.clone()))?;
        if !Profile::validate_age(age) {
            return Err(ProfileError::AgeOutOfRange(age));
        }
        Ok(age)
    }

    fn parsed_height(&self) -> Result<f32, ProfileError> {
        let height: f32 = self
            .height_cm
            .trim()
            .parse()
            .map_err(|_| ProfileError::InvalidHeight(self.height_cm.clone()))?;
        if !Profile::validate_height(height) {
            return Err(ProfileError::HeightOutOfRange(height));
        }
        Ok(height)
    }

    fn parsed_weight(&self) -> Result<f32, ProfileError> {
        let weight: f32 = self
            .weight_kg
            .trim()
            .parse()
            .map_err(|_| ProfileError::InvalidWeight(self.weight_kg.clone()))?;
        if !Profile::validate_weight(weight) {
            return Err(ProfileError::WeightOutOfRange(weight));
        }
        Ok(weight)
    }

    /// Whether every field belonging to `step` is filled and valid.
    ///
    /// Gates the wizard's Next button; Welcome and Complete carry no
    /// fields and are always valid.
    pub fn is_step_valid(&self, step: OnboardingStep) -> bool {
        match step {
            OnboardingStep::Welcome | OnboardingStep::Complete => true,
            OnboardingStep::PersonalInfo => {
                !self.name.trim().is_empty()
                    && self.parsed_age().is_ok()
                    && self.gender.is_some()
            }
            OnboardingStep::BodyMetrics => {
                self.parsed_height().is_ok() && self.parsed_weight().is_ok()
            }
            OnboardingStep::Lifestyle => {
                self.activity_level.is_some() && self.diet_preference.is_some()
            }
            OnboardingStep::Goals => self.fitness_goal.is_some(),
        }
    }

    /// Validate every field and build the finished profile.
    pub fn build(&self) -> Result<Profile, ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }

        let profile = Profile {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            age: self.parsed_age()?,
            height_cm: self.parsed_height()?,
            weight_kg: self.parsed_weight()?,
            gender: self
                .gender
                .ok_or(ProfileError::MissingSelection("gender"))?,
            activity_level: self
                .activity_level
                .ok_or(ProfileError::MissingSelection("daily routine"))?,
            diet_preference: self
                .diet_preference
                .ok_or(ProfileError::MissingSelection("food preference"))?,
            fitness_goal: self
                .fitness_goal
                .ok_or(ProfileError::MissingSelection("fitness goal"))?,
            created_at: Utc::now(),
        };

        Ok(profile)
    }
}
