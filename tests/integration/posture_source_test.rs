//! Integration tests for the simulated posture signal source.

use std::thread;
use std::time::Duration;

use crossbeam::channel::TryRecvError;

use fitform::trainer::signal::{
    PostureSignal, PostureSignalSource, SimulatedPostureSource,
};
use fitform::trainer::WorkoutSession;

#[test]
fn test_simulated_source_emits_reps_and_feedback() {
    let mut source =
        SimulatedPostureSource::with_intervals(Duration::from_millis(10), Duration::from_millis(15));

    let rx = source.start();
    assert!(source.is_running());
    thread::sleep(Duration::from_millis(150));
    source.stop();
    assert!(!source.is_running());

    let mut reps = 0;
    let mut feedback = 0;
    for signal in rx.try_iter() {
        match signal {
            PostureSignal::Rep(sample) => {
                reps += 1;
                assert!(
                    (80..=99).contains(&sample.posture_score),
                    "score {} outside simulated range",
                    sample.posture_score
                );
                assert!(
                    (1..=3).contains(&sample.calories),
                    "calories {} outside simulated range",
                    sample.calories
                );
            }
            PostureSignal::Feedback(message) => {
                feedback += 1;
                assert!(!message.text.is_empty());
            }
        }
    }

    // 150 ms at a 10/15 ms cadence; generous margins for slow machines
    assert!(reps >= 3, "expected several rep samples, got {reps}");
    assert!(feedback >= 1, "expected at least one coaching message");

    // Worker has exited, so the channel is now disconnected
    assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
}

#[test]
fn test_restart_hands_out_a_fresh_channel() {
    let mut source =
        SimulatedPostureSource::with_intervals(Duration::from_millis(10), Duration::from_millis(500));

    let first = source.start();
    thread::sleep(Duration::from_millis(40));
    let second = source.start();
    thread::sleep(Duration::from_millis(40));
    source.stop();

    // The first receiver's sender was dropped on restart
    while first.try_recv().is_ok() {}
    assert_eq!(first.try_recv(), Err(TryRecvError::Disconnected));

    // The replacement channel carried live signals
    assert!(second.try_iter().count() > 0);
}

#[test]
fn test_session_consumes_the_signal_stream() {
    let mut source =
        SimulatedPostureSource::with_intervals(Duration::from_millis(10), Duration::from_millis(15));
    let mut session = WorkoutSession::new();

    session.start();
    let rx = source.start();
    thread::sleep(Duration::from_millis(120));
    source.stop();

    for signal in rx.try_iter() {
        session.apply(signal);
    }
    session.pause();

    assert!(session.reps() > 0);
    assert!(session.calories() >= session.reps()); // at least 1 kcal per rep
    assert!(session.elapsed() >= Duration::from_millis(100));
}

#[test]
fn test_stop_is_idempotent() {
    let mut source = SimulatedPostureSource::new();
    source.stop(); // never started

    let _rx = source.start();
    source.stop();
    source.stop();
    assert!(!source.is_running());
}
