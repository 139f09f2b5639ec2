//! Unit test modules.

mod metrics_test;
mod onboarding_test;
mod recommendations_test;
mod trainer_session_test;
