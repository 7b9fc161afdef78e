//! Deterministic, pure logic shared by the matchers.
//!
//! Core modules must be free of I/O side effects. They operate on values and
//! instants handed to them and return deterministic outputs suitable for tests.

pub mod deadline;
pub mod message;
pub mod outcome;
pub mod truthy;
pub mod types;
