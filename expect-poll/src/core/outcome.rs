//! Terminal outcome of an assertion call.
//!
//! The outcome carries an immutable snapshot of everything the diagnostic
//! needs. Building it never formats; [`Outcome::message`] renders on demand.

use std::fmt::Debug;
use std::time::Duration;

use crate::core::message::failure_message;
use crate::core::types::MatcherOptions;

/// State captured when the poll loop stops.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeSnapshot<T> {
    pub matcher_name: String,
    pub options: MatcherOptions,
    /// Last value observed from the query, if any attempt completed.
    pub received: Option<T>,
    pub attempts: u32,
    pub elapsed: Duration,
    /// Effective timeout (`0` = unbounded).
    pub timeout: Duration,
    /// The deadline expired before the expectation matched.
    pub timed_out: bool,
}

/// Pass/fail verdict plus a deferred diagnostic.
///
/// `pass` already accounts for polarity: it is `true` exactly when the
/// observed value matched the expectation (`expect(..).not` included).
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub pass: bool,
    snapshot: OutcomeSnapshot<T>,
}

/// Anything downstream reporting can fold into a test result.
pub trait AssertionVerdict {
    fn pass(&self) -> bool;
    /// Human-readable diagnostic. Only called when the verdict is reported.
    fn message(&self) -> String;
}

/// Package a verdict with its snapshot without evaluating the message.
pub fn build_outcome<T>(pass: bool, snapshot: OutcomeSnapshot<T>) -> Outcome<T> {
    Outcome { pass, snapshot }
}

impl<T> Outcome<T> {
    pub fn snapshot(&self) -> &OutcomeSnapshot<T> {
        &self.snapshot
    }

    pub fn received(&self) -> Option<&T> {
        self.snapshot.received.as_ref()
    }

    pub fn attempts(&self) -> u32 {
        self.snapshot.attempts
    }

    pub fn elapsed(&self) -> Duration {
        self.snapshot.elapsed
    }

    pub fn timed_out(&self) -> bool {
        self.snapshot.timed_out
    }
}

impl<T: Debug> Outcome<T> {
    pub fn message(&self) -> String {
        failure_message(&self.snapshot)
    }
}

impl<T: Debug> AssertionVerdict for Outcome<T> {
    fn pass(&self) -> bool {
        self.pass
    }

    fn message(&self) -> String {
        Outcome::message(self)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fmt;

    use super::*;

    /// Counts how often the value is rendered.
    struct Probe<'a>(&'a Cell<u32>);

    impl fmt::Debug for Probe<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.set(self.0.get() + 1);
            f.write_str("probe")
        }
    }

    fn snapshot<T>(received: Option<T>) -> OutcomeSnapshot<T> {
        OutcomeSnapshot {
            matcher_name: "toBeTruthy".to_string(),
            options: MatcherOptions::default(),
            received,
            attempts: 1,
            elapsed: Duration::ZERO,
            timeout: Duration::from_secs(1),
            timed_out: false,
        }
    }

    #[test]
    fn building_does_not_format() {
        let renders = Cell::new(0);
        let outcome = build_outcome(false, snapshot(Some(Probe(&renders))));
        assert_eq!(renders.get(), 0);
        assert!(!outcome.pass);

        let _ = outcome.message();
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn message_is_idempotent() {
        let outcome = build_outcome(true, snapshot(Some(42u32)));
        let first = outcome.message();
        assert_eq!(first, outcome.message());
        assert_eq!(outcome.received(), Some(&42));
    }

    #[test]
    fn verdict_trait_delegates() {
        let outcome = build_outcome(false, snapshot::<bool>(None));
        let verdict: &dyn AssertionVerdict = &outcome;
        assert!(!verdict.pass());
        assert!(verdict.message().contains("Received: <no value>"));
    }
}
