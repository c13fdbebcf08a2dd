//! Configuration module tests
//!
//! Contains test suites for tuning file handling:
//! - Parser tests (line syntax, comments, line numbers)
//! - Config tests (typed conversion, validation, atomic save with backup)


#[cfg(test)]
mod parser_tests;
