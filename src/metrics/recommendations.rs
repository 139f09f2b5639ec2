//! Goal-based coaching recommendations.
//!
//! Static editorial content: tip lists, macro splits and exercise-type
//! tags per fitness goal. Data, not logic -- edit freely.

use serde::{Deserialize, Serialize};

use crate::profile::types::FitnessGoal;

/// Macronutrient split as percentages of daily intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share in percent
    pub protein: u8,
    /// Carbohydrate share in percent
    pub carbs: u8,
    /// Fat share in percent
    pub fats: u8,
}

/// A coaching bundle for one fitness goal.
#[derive(Debug, PartialEq, Eq)]
pub struct Recommendation {
    /// Ordered coaching tips
    pub tips: &'static [&'static str],
    /// Suggested macronutrient split
    pub macros: MacroSplit,
    /// Suggested exercise types
    pub exercise_types: &'static [&'static str],
}

const LOSE_WEIGHT: Recommendation = Recommendation {
    tips: &[
        "Focus on creating a caloric deficit through diet and exercise",
        "Incorporate both cardio and strength training",
        "Aim for 150-300 minutes of moderate exercise per week",
        "Stay hydrated and get adequate sleep",
        "Track your progress with measurements, not just weight",
        "Be patient and consistent with your routine",
    ],
    macros: MacroSplit {
        protein: 30,
        carbs: 40,
        fats: 30,
    },
    exercise_types: &["HIIT", "Cardio", "Strength Training"],
};

const GAIN_MUSCLE: Recommendation = Recommendation {
    tips: &[
        "Eat in a slight caloric surplus (300-500 calories above maintenance)",
        "Prioritize protein intake (1.6-2.2g per kg of body weight)",
        "Focus on progressive overload in strength training",
        "Get 7-9 hours of quality sleep for recovery",
        "Allow adequate rest between intense training sessions",
        "Include compound exercises in your routine",
    ],
    macros: MacroSplit {
        protein: 35,
        carbs: 45,
        fats: 20,
    },
    exercise_types: &["Strength Training", "Progressive Overload", "Compound Movements"],
};

const STAY_FIT: Recommendation = Recommendation {
    tips: &[
        "Maintain a balanced diet with variety",
        "Mix different types of exercise to stay engaged",
        "Listen to your body and adjust intensity as needed",
        "Make fitness a sustainable part of your lifestyle",
        "Regular health check-ups and fitness assessments",
        "Stay active throughout the day, not just during workouts",
    ],
    macros: MacroSplit {
        protein: 25,
        carbs: 50,
        fats: 25,
    },
    exercise_types: &["Mixed Training", "Flexibility", "Cardio"],
};

const IMPROVE_ENDURANCE: Recommendation = Recommendation {
    tips: &[
        "Gradually increase workout duration and intensity",
        "Focus on cardiovascular exercises and longer sessions",
        "Include interval training to boost stamina",
        "Proper nutrition and hydration for sustained energy",
        "Cross-train with different activities to prevent overuse",
        "Monitor your heart rate during workouts",
    ],
    macros: MacroSplit {
        protein: 20,
        carbs: 60,
        fats: 20,
    },
    exercise_types: &["Cardio", "Interval Training", "Endurance Sports"],
};

/// Look up the bundle for a goal.
///
/// `FitnessGoal` is closed, so every goal has an entry; unknown goal
/// labels already collapsed to `StayFit` at the parse boundary.
pub fn recommendation_for(goal: FitnessGoal) -> &'static Recommendation {
    match goal {
        FitnessGoal::LoseWeight => &LOSE_WEIGHT,
        FitnessGoal::GainMuscle => &GAIN_MUSCLE,
        FitnessGoal::StayFit => &STAY_FIT,
        FitnessGoal::ImproveEndurance => &IMPROVE_ENDURANCE,
    }
}
