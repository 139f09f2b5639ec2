//! Derived health metrics and goal-based recommendations.

pub mod engine;
pub mod recommendations;

pub use engine::{
    bmi, daily_calories, ideal_weight_kg, water_intake_ml, BmiCategory, HealthSummary,
};
pub use recommendations::{recommendation_for, MacroSplit, Recommendation};
