//! Deadline-bound polling assertions.
//!
//! A matcher turns a one-shot, possibly stale asynchronous check into a
//! retried verification that converges on an expected truthiness within a
//! bounded total time budget. The crate keeps the same split as the rest of
//! the workspace:
//!
//! - **[`core`]**: Pure logic (deadline resolution, truthiness, polarity,
//!   outcome snapshots and message formatting). No clock reads beyond the
//!   instants passed in, no I/O.
//! - **[`poll`]** and **[`matcher`]**: The async poll loop and the assertion
//!   entry point that wires context, target validation, deadline and query
//!   together.
//!
//! [`state`] layers the named element-state matchers (`toBeChecked`,
//! `toBeVisible`, ...) on top of [`matcher::to_be_truthy`].

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod handle;
pub mod logging;
pub mod matcher;
pub mod poll;
pub mod query;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
