//! Deck module tests
//!
//! Contains test suites for the discovery deck:
//! - Deck tests (cursor, exhaustion, refresh)
//! - Confirmation queue tests (tickets, ordering)

#[cfg(test)]
mod confirmation_tests;
#[cfg(test)]
mod deck_tests;
