//! Unit tests for the trainer workout session.

use std::time::Duration;

use fitform::trainer::session::{
    format_workout_time, Exercise, PostureRating, WorkoutSession, DEFAULT_POSTURE_SCORE,
    IDLE_FEEDBACK, PAUSE_FEEDBACK, START_FEEDBACK,
};
use fitform::trainer::signal::{
    FeedbackKind, PostureSample, PostureSignal, FEEDBACK_MESSAGES,
};

#[test]
fn test_exercise_catalog() {
    let all = Exercise::all();
    assert_eq!(all.len(), 5);
    assert_eq!(all[0].display_name(), "Push-ups");
    assert_eq!(all[4].display_name(), "Burpees");
}

#[test]
fn test_posture_rating_bands() {
    assert_eq!(PostureRating::from_score(100), PostureRating::Excellent);
    assert_eq!(PostureRating::from_score(90), PostureRating::Excellent);
    assert_eq!(PostureRating::from_score(89), PostureRating::Good);
    assert_eq!(PostureRating::from_score(75), PostureRating::Good);
    assert_eq!(PostureRating::from_score(74), PostureRating::NeedsWork);
    assert_eq!(PostureRating::from_score(0), PostureRating::NeedsWork);
}

#[test]
fn test_session_lifecycle_messages() {
    let mut session = WorkoutSession::new();
    assert_eq!(session.feedback(), IDLE_FEEDBACK);
    assert_eq!(session.posture_score(), DEFAULT_POSTURE_SCORE);

    session.start();
    assert!(session.is_running());
    assert_eq!(session.feedback(), START_FEEDBACK);

    session.pause();
    assert!(!session.is_running());
    assert_eq!(session.feedback(), PAUSE_FEEDBACK);
}

#[test]
fn test_rep_signals_accumulate() {
    let mut session = WorkoutSession::new();

    for score in [91, 85, 88] {
        session.apply(PostureSignal::Rep(PostureSample {
            posture_score: score,
            calories: 2,
        }));
    }

    assert_eq!(session.reps(), 3);
    assert_eq!(session.calories(), 6);
    assert_eq!(session.posture_score(), 88);
}

#[test]
fn test_feedback_signal_updates_message() {
    let mut session = WorkoutSession::new();
    let message = FEEDBACK_MESSAGES[2];

    session.apply(PostureSignal::Feedback(message));

    assert_eq!(session.feedback(), message.text);
    assert_eq!(session.feedback_kind(), message.kind);
}

#[test]
fn test_feedback_messages_catalog() {
    assert_eq!(FEEDBACK_MESSAGES.len(), 7);
    assert!(FEEDBACK_MESSAGES
        .iter()
        .any(|m| m.kind == FeedbackKind::Success));
    assert!(FEEDBACK_MESSAGES
        .iter()
        .any(|m| m.kind == FeedbackKind::Warning));
}

#[test]
fn test_reset_restores_idle_state() {
    let mut session = WorkoutSession::new();
    session.set_exercise(Exercise::Plank);
    session.start();
    session.apply(PostureSignal::Rep(PostureSample {
        posture_score: 97,
        calories: 3,
    }));

    session.reset();

    assert!(!session.is_running());
    assert_eq!(session.reps(), 0);
    assert_eq!(session.calories(), 0);
    assert_eq!(session.posture_score(), DEFAULT_POSTURE_SCORE);
    assert_eq!(session.feedback(), IDLE_FEEDBACK);
    // Exercise selection survives the reset
    assert_eq!(session.exercise(), Exercise::Plank);
}

#[test]
fn test_pause_freezes_clock() {
    let mut session = WorkoutSession::new();
    session.start();
    std::thread::sleep(Duration::from_millis(30));
    session.pause();

    let frozen = session.elapsed();
    assert!(frozen >= Duration::from_millis(30));

    std::thread::sleep(Duration::from_millis(30));
    assert_eq!(session.elapsed(), frozen);
}

#[test]
fn test_format_workout_time() {
    assert_eq!(format_workout_time(Duration::ZERO), "00:00");
    assert_eq!(format_workout_time(Duration::from_secs(9)), "00:09");
    assert_eq!(format_workout_time(Duration::from_secs(65)), "01:05");
    assert_eq!(format_workout_time(Duration::from_secs(3600)), "60:00");
}
