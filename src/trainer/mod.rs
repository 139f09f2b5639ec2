//! Simulated AI posture trainer.
//!
//! Signal generation is isolated behind [`PostureSignalSource`] so a
//! real pose-estimation pipeline could replace the simulation without
//! touching the session or the UI.

pub mod session;
pub mod signal;

pub use session::{Exercise, PostureRating, WorkoutSession};
pub use signal::{
    FeedbackKind, FeedbackMessage, PostureSample, PostureSignal, PostureSignalSource,
    SimulatedPostureSource,
};
