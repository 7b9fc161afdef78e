//! Per-test execution context.
//!
//! Passed explicitly into every assertion; there is no ambient lookup.

use std::time::Duration;

use crate::config::ExpectConfig;

/// Read-only state of the currently running test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestContext {
    pub title: String,
    /// Default assertion timeout (`0` = unbounded).
    pub timeout: Duration,
}

impl TestContext {
    pub fn new(title: impl Into<String>, timeout: Duration) -> Self {
        Self {
            title: title.into(),
            timeout,
        }
    }

    /// Context whose default timeout comes from the loaded configuration.
    pub fn from_config(title: impl Into<String>, config: &ExpectConfig) -> Self {
        Self::new(title, config.default_timeout())
    }
}
