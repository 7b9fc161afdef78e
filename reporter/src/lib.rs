//! Test-run reporting.
//!
//! Assertion verdicts from `expect_poll` are folded into [`schema::TestResult`]s
//! ([`outcome`]), collected by a [`reporter::Reporter`], persisted as JSON and
//! inspected later through [`validate`] and [`summary`].

pub mod cli;
pub mod outcome;
pub mod reporter;
pub mod schema;
pub mod summary;
#[cfg(test)]
mod test_support;
pub mod validate;
