//! Shared deterministic types for matcher core logic.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How the assertion was chained onto a promise-like value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromiseTag {
    #[default]
    None,
    Resolves,
    Rejects,
}

impl PromiseTag {
    /// Hint segment inserted after `expect(received)`, empty for [`PromiseTag::None`].
    pub fn hint_segment(self) -> &'static str {
        match self {
            PromiseTag::None => "",
            PromiseTag::Resolves => ".resolves",
            PromiseTag::Rejects => ".rejects",
        }
    }
}

/// Caller options for one assertion call.
///
/// `timeout: None` falls back to the context default; `Some(Duration::ZERO)`
/// disables the deadline entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatcherOptions {
    pub is_not: bool,
    pub promise: PromiseTag,
    pub timeout: Option<Duration>,
}

impl MatcherOptions {
    /// Negated expectation (`expect(...).not`).
    pub fn negated() -> Self {
        Self {
            is_not: true,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_promise(mut self, promise: PromiseTag) -> Self {
        self.promise = promise;
        self
    }

    /// Truthiness the observed value must reach for the assertion to pass.
    pub fn expected_truthiness(&self) -> bool {
        !self.is_not
    }

    /// Apply polarity to an observed truthiness.
    pub fn matches(&self, truthy: bool) -> bool {
        truthy == self.expected_truthiness()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_flips_with_is_not() {
        let positive = MatcherOptions::default();
        assert!(positive.matches(true));
        assert!(!positive.matches(false));

        let negated = MatcherOptions::negated();
        assert!(negated.matches(false));
        assert!(!negated.matches(true));
    }

    #[test]
    fn builder_keeps_other_fields() {
        let options = MatcherOptions::negated()
            .with_timeout(Duration::from_millis(250))
            .with_promise(PromiseTag::Resolves);
        assert!(options.is_not);
        assert_eq!(options.timeout, Some(Duration::from_millis(250)));
        assert_eq!(options.promise.hint_segment(), ".resolves");
    }
}
