//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Gesture state machine tests (drag, trigger, timed transitions)
//! - Release policy tests
//! - Style derivation tests (card transform, overlay tint)

#[cfg(test)]
mod policy_tests;
