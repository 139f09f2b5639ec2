//! Integration test modules.

mod onboarding_flow_test;
mod posture_source_test;
