//! Simulator tests

#[cfg(test)]
mod runner_tests;
#[cfg(test)]
mod script_tests;
