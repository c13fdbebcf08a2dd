//! UI module tests
//!
//! Controller logic is tested without a display server; the GTK4 view
//! only forwards events to it.

#[cfg(test)]
mod controller_tests;
