//! Posture signal sources.
//!
//! The trainer screen consumes an abstract stream of rep samples and
//! coaching feedback. The only implementation today is a simulated
//! generator; a camera-backed pose estimator would slot in behind the
//! same trait without touching the session or the view.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam::channel::{unbounded, Receiver, Sender};
use rand::Rng;

/// Severity of a coaching message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Form looks good
    Success,
    /// Neutral guidance
    Info,
    /// Correction needed
    Warning,
}

/// A coaching message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackMessage {
    /// Message text
    pub text: &'static str,
    /// Severity
    pub kind: FeedbackKind,
}

/// Coaching messages the simulated source cycles through.
pub const FEEDBACK_MESSAGES: [FeedbackMessage; 7] = [
    FeedbackMessage {
        text: "Excellent form! Keep it up!",
        kind: FeedbackKind::Success,
    },
    FeedbackMessage {
        text: "Good posture, focus on alignment",
        kind: FeedbackKind::Info,
    },
    FeedbackMessage {
        text: "Tip: Keep your back straight",
        kind: FeedbackKind::Warning,
    },
    FeedbackMessage {
        text: "Great technique! You're doing amazing",
        kind: FeedbackKind::Success,
    },
    FeedbackMessage {
        text: "Lower your body more for better range",
        kind: FeedbackKind::Info,
    },
    FeedbackMessage {
        text: "Perfect! Maintain this form",
        kind: FeedbackKind::Success,
    },
    FeedbackMessage {
        text: "Slow down the movement for better control",
        kind: FeedbackKind::Warning,
    },
];

/// One completed repetition as observed by the signal source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostureSample {
    /// Posture score for the rep, 0-100
    pub posture_score: u8,
    /// Calories burned by the rep, kcal
    pub calories: u16,
}

/// A signal delivered from the source to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostureSignal {
    /// A repetition was completed
    Rep(PostureSample),
    /// A coaching message was produced
    Feedback(FeedbackMessage),
}

/// A source of posture signals.
pub trait PostureSignalSource {
    /// Begin producing signals; returns the channel they arrive on.
    ///
    /// Calling `start` on a running source restarts it with a fresh
    /// channel; the previous receiver disconnects.
    fn start(&mut self) -> Receiver<PostureSignal>;

    /// Stop producing signals and release the worker.
    fn stop(&mut self);

    /// Whether the source is currently producing signals.
    fn is_running(&self) -> bool;
}

/// Default rep cadence of the simulated source.
pub const DEFAULT_REP_INTERVAL: Duration = Duration::from_secs(3);
/// Default feedback cadence of the simulated source.
pub const DEFAULT_FEEDBACK_INTERVAL: Duration = Duration::from_secs(4);

/// Randomized posture signal generator.
///
/// Emits a rep sample (score uniform in 80-99, 1-3 kcal) every rep
/// interval and one of [`FEEDBACK_MESSAGES`] every feedback interval,
/// from a worker thread over a crossbeam channel.
pub struct SimulatedPostureSource {
    rep_interval: Duration,
    feedback_interval: Duration,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl Default for SimulatedPostureSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedPostureSource {
    /// Create a source with the default 3s/4s cadence.
    pub fn new() -> Self {
        Self::with_intervals(DEFAULT_REP_INTERVAL, DEFAULT_FEEDBACK_INTERVAL)
    }

    /// Create a source with explicit intervals (used by tests).
    pub fn with_intervals(rep_interval: Duration, feedback_interval: Duration) -> Self {
        Self {
            rep_interval,
            feedback_interval,
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    fn run_worker(
        tx: Sender<PostureSignal>,
        running: Arc<AtomicBool>,
        rep_interval: Duration,
        feedback_interval: Duration,
    ) {
        let mut rng = rand::thread_rng();
        let started = Instant::now();
        let mut next_rep = rep_interval;
        let mut next_feedback = feedback_interval;

        while running.load(Ordering::Relaxed) {
            let now = started.elapsed();
            let due = next_rep.min(next_feedback);
            if due > now {
                // Short sleeps keep stop() responsive
                thread::sleep((due - now).min(Duration::from_millis(50)));
                continue;
            }

            if next_rep <= now {
                let sample = PostureSample {
                    posture_score: rng.gen_range(80..100),
                    calories: rng.gen_range(1..=3),
                };
                if tx.send(PostureSignal::Rep(sample)).is_err() {
                    running.store(false, Ordering::Relaxed);
                    break;
                }
                next_rep += rep_interval;
            }

            if next_feedback <= now {
                let message = FEEDBACK_MESSAGES[rng.gen_range(0..FEEDBACK_MESSAGES.len())];
                if tx.send(PostureSignal::Feedback(message)).is_err() {
                    running.store(false, Ordering::Relaxed);
                    break;
                }
                next_feedback += feedback_interval;
            }
        }
    }
}

impl PostureSignalSource for SimulatedPostureSource {
    fn start(&mut self) -> Receiver<PostureSignal> {
        self.stop();

        let (tx, rx) = unbounded();
        let running = Arc::new(AtomicBool::new(true));
        self.running = Arc::clone(&running);

        let rep_interval = self.rep_interval;
        let feedback_interval = self.feedback_interval;
        self.worker = Some(thread::spawn(move || {
            Self::run_worker(tx, running, rep_interval, feedback_interval);
        }));

        tracing::debug!(?rep_interval, ?feedback_interval, "posture signal source started");
        rx
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
            tracing::debug!("posture signal source stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

impl Drop for SimulatedPostureSource {
    fn drop(&mut self) {
        self.stop();
    }
}
