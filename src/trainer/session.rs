//! Workout session state for the AI trainer screen.

use std::time::{Duration, Instant};

use super::signal::{FeedbackKind, PostureSignal};

/// Exercises the trainer can coach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Exercise {
    #[default]
    PushUps,
    Squats,
    Lunges,
    Plank,
    Burpees,
}

impl Exercise {
    /// All exercises, in display order.
    pub fn all() -> &'static [Exercise] {
        &[
            Exercise::PushUps,
            Exercise::Squats,
            Exercise::Lunges,
            Exercise::Plank,
            Exercise::Burpees,
        ]
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Exercise::PushUps => "Push-ups",
            Exercise::Squats => "Squats",
            Exercise::Lunges => "Lunges",
            Exercise::Plank => "Plank",
            Exercise::Burpees => "Burpees",
        }
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Qualitative posture rating bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostureRating {
    /// Score 90 and above
    Excellent,
    /// Score 75-89
    Good,
    /// Score below 75
    NeedsWork,
}

impl PostureRating {
    /// Band a score.
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            PostureRating::Excellent
        } else if score >= 75 {
            PostureRating::Good
        } else {
            PostureRating::NeedsWork
        }
    }

    /// Get the display label.
    pub fn label(&self) -> &'static str {
        match self {
            PostureRating::Excellent => "Excellent",
            PostureRating::Good => "Good",
            PostureRating::NeedsWork => "Needs Work",
        }
    }
}

/// Posture score shown before any rep has been observed.
pub const DEFAULT_POSTURE_SCORE: u8 = 85;

/// Prompt shown while the trainer is idle.
pub const IDLE_FEEDBACK: &str = "Position yourself in front of the camera";
/// Message shown when analysis starts.
pub const START_FEEDBACK: &str = "AI analysis started - Begin your exercise!";
/// Message shown when the workout is paused.
pub const PAUSE_FEEDBACK: &str = "Workout paused";

/// Accumulated state of one trainer workout.
///
/// Consumes [`PostureSignal`]s from whatever source is wired up and
/// keeps the counters the trainer screen displays. Owns no timer of its
/// own; the workout clock accumulates wall time between start and pause.
#[derive(Debug)]
pub struct WorkoutSession {
    exercise: Exercise,
    reps: u32,
    posture_score: u8,
    calories: u32,
    running: bool,
    elapsed: Duration,
    resumed_at: Option<Instant>,
    feedback: String,
    feedback_kind: FeedbackKind,
}

impl Default for WorkoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self {
            exercise: Exercise::default(),
            reps: 0,
            posture_score: DEFAULT_POSTURE_SCORE,
            calories: 0,
            running: false,
            elapsed: Duration::ZERO,
            resumed_at: None,
            feedback: IDLE_FEEDBACK.to_string(),
            feedback_kind: FeedbackKind::Info,
        }
    }

    /// Currently selected exercise.
    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    /// Select an exercise.
    pub fn set_exercise(&mut self, exercise: Exercise) {
        self.exercise = exercise;
    }

    /// Whether the workout clock is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Completed reps this workout.
    pub fn reps(&self) -> u32 {
        self.reps
    }

    /// Most recent posture score.
    pub fn posture_score(&self) -> u8 {
        self.posture_score
    }

    /// Rating band for the current posture score.
    pub fn posture_rating(&self) -> PostureRating {
        PostureRating::from_score(self.posture_score)
    }

    /// Calories burned this workout.
    pub fn calories(&self) -> u32 {
        self.calories
    }

    /// Current coaching message.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Severity of the current coaching message.
    pub fn feedback_kind(&self) -> FeedbackKind {
        self.feedback_kind
    }

    /// Total workout time, including the currently running stretch.
    pub fn elapsed(&self) -> Duration {
        match self.resumed_at {
            Some(resumed) => self.elapsed + resumed.elapsed(),
            None => self.elapsed,
        }
    }

    /// Start or resume the workout.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.resumed_at = Some(Instant::now());
        self.feedback = START_FEEDBACK.to_string();
        self.feedback_kind = FeedbackKind::Info;
        tracing::info!(exercise = %self.exercise, "workout started");
    }

    /// Pause the workout, freezing the clock.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(resumed) = self.resumed_at.take() {
            self.elapsed += resumed.elapsed();
        }
        self.feedback = PAUSE_FEEDBACK.to_string();
        self.feedback_kind = FeedbackKind::Info;
        tracing::info!(reps = self.reps, "workout paused");
    }

    /// Reset every counter back to the idle state.
    pub fn reset(&mut self) {
        let exercise = self.exercise;
        *self = Self::new();
        self.exercise = exercise;
    }

    /// Fold one signal into the session state.
    pub fn apply(&mut self, signal: PostureSignal) {
        match signal {
            PostureSignal::Rep(sample) => {
                self.reps += 1;
                self.posture_score = sample.posture_score;
                self.calories += u32::from(sample.calories);
            }
            PostureSignal::Feedback(message) => {
                self.feedback = message.text.to_string();
                self.feedback_kind = message.kind;
            }
        }
    }
}

/// Format a workout duration as zero-padded mm:ss.
pub fn format_workout_time(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
