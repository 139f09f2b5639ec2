//! Unit tests for the goal recommendation table.

use fitform::metrics::recommendations::{recommendation_for, MacroSplit};
use fitform::profile::types::FitnessGoal;

#[test]
fn test_gain_muscle_bundle() {
    let bundle = recommendation_for(FitnessGoal::GainMuscle);

    assert_eq!(
        bundle.macros,
        MacroSplit {
            protein: 35,
            carbs: 45,
            fats: 20
        }
    );
    assert_eq!(bundle.tips.len(), 6);
    assert_eq!(
        bundle.exercise_types,
        ["Strength Training", "Progressive Overload", "Compound Movements"]
    );
}

#[test]
fn test_lose_weight_bundle() {
    let bundle = recommendation_for(FitnessGoal::LoseWeight);

    assert_eq!(
        bundle.macros,
        MacroSplit {
            protein: 30,
            carbs: 40,
            fats: 30
        }
    );
    assert_eq!(
        bundle.tips[0],
        "Focus on creating a caloric deficit through diet and exercise"
    );
    assert_eq!(bundle.exercise_types, ["HIIT", "Cardio", "Strength Training"]);
}

#[test]
fn test_stay_fit_bundle() {
    let bundle = recommendation_for(FitnessGoal::StayFit);

    assert_eq!(
        bundle.macros,
        MacroSplit {
            protein: 25,
            carbs: 50,
            fats: 25
        }
    );
    assert_eq!(bundle.exercise_types, ["Mixed Training", "Flexibility", "Cardio"]);
}

#[test]
fn test_improve_endurance_bundle() {
    let bundle = recommendation_for(FitnessGoal::ImproveEndurance);

    assert_eq!(
        bundle.macros,
        MacroSplit {
            protein: 20,
            carbs: 60,
            fats: 20
        }
    );
    assert_eq!(
        bundle.exercise_types,
        ["Cardio", "Interval Training", "Endurance Sports"]
    );
}

#[test]
fn test_every_macro_split_sums_to_100() {
    for goal in FitnessGoal::all() {
        let MacroSplit { protein, carbs, fats } = recommendation_for(*goal).macros;
        assert_eq!(
            u32::from(protein) + u32::from(carbs) + u32::from(fats),
            100,
            "{goal} macros should sum to 100%"
        );
    }
}

#[test]
fn test_unknown_goal_label_falls_back_to_stay_fit() {
    let goal = FitnessGoal::from_label("get-swole");
    assert_eq!(goal, FitnessGoal::StayFit);
    assert_eq!(
        recommendation_for(goal),
        recommendation_for(FitnessGoal::StayFit)
    );
}

#[test]
fn test_lookup_is_idempotent() {
    let first = recommendation_for(FitnessGoal::ImproveEndurance);
    let second = recommendation_for(FitnessGoal::ImproveEndurance);
    assert!(std::ptr::eq(first, second));
}
