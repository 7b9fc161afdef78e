//! Fatal precondition failures raised before any polling.
//!
//! These travel inside `anyhow::Error`; callers that need to tell them apart
//! from query failures use `err.downcast_ref::<MatcherError>()`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatcherError {
    /// The assertion ran outside an active test.
    #[error("{matcher_name} must be called during the test")]
    MissingContext { matcher_name: String },

    /// The target handle cannot be used with this matcher.
    #[error("{matcher_name} can be only used with a valid target: {reason}")]
    InvalidHandle {
        matcher_name: String,
        reason: String,
    },
}

impl MatcherError {
    pub fn missing_context(matcher_name: &str) -> Self {
        Self::MissingContext {
            matcher_name: matcher_name.to_string(),
        }
    }

    pub fn invalid_handle(matcher_name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidHandle {
            matcher_name: matcher_name.to_string(),
            reason: reason.into(),
        }
    }
}
