//! Target handles and the one-time capability check.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::MatcherError;

/// Selector engines a [`Locator`] may name explicitly (`engine=body`).
pub const KNOWN_ENGINES: &[&str] = &["css", "text", "xpath", "id", "data-testid", "role"];

/// A handle an assertion can be made against.
///
/// `check` runs once per assertion call, before polling; it must not touch
/// the live target.
pub trait ExpectTarget {
    fn check(&self, matcher_name: &str) -> Result<(), MatcherError>;
}

/// Reference to an element on a remote target, addressed by selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    pub selector: String,
}

impl Locator {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    /// Explicit engine prefix and body, if the selector names one.
    pub fn engine(&self) -> Option<(&str, &str)> {
        static ENGINE_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^\s*([A-Za-z][A-Za-z0-9_-]*)=(.*)$").unwrap());
        let caps = ENGINE_RE.captures(&self.selector)?;
        let engine = caps.get(1)?.as_str();
        let body = caps.get(2)?.as_str();
        Some((engine, body))
    }
}

impl ExpectTarget for Locator {
    fn check(&self, matcher_name: &str) -> Result<(), MatcherError> {
        if self.selector.trim().is_empty() {
            return Err(MatcherError::invalid_handle(matcher_name, "empty selector"));
        }
        if let Some((engine, body)) = self.engine() {
            if !KNOWN_ENGINES.contains(&engine) {
                return Err(MatcherError::invalid_handle(
                    matcher_name,
                    format!("unknown selector engine \"{engine}\""),
                ));
            }
            if body.trim().is_empty() {
                return Err(MatcherError::invalid_handle(
                    matcher_name,
                    format!("empty {engine} selector"),
                ));
            }
        }
        Ok(())
    }
}

impl<T: ExpectTarget + ?Sized> ExpectTarget for &T {
    fn check(&self, matcher_name: &str) -> Result<(), MatcherError> {
        (**self).check(matcher_name)
    }
}
