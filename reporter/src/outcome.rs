//! Folding assertion verdicts into test results and run status.

use expect_poll::core::outcome::AssertionVerdict;
use tracing::debug;

use crate::schema::{FullStatus, Suite, TestError, TestOutcome, TestResult, TestStatus};

/// Record one assertion verdict on a test result.
///
/// A passing verdict leaves the result untouched and its message is never
/// rendered. A failing verdict marks the result failed; the first recorded
/// failure keeps its error.
pub fn record_assertion<V: AssertionVerdict + ?Sized>(result: &mut TestResult, verdict: &V) {
    if verdict.pass() {
        return;
    }
    result.status = TestStatus::Failed;
    if result.error.is_none() {
        let message = verdict.message();
        debug!(retry = result.retry, "assertion failed");
        result.error = Some(TestError::from_message(message));
    }
}

/// Derive the run status from the finished suite.
///
/// Interruption wins over a global timeout, which wins over test failures.
/// Flaky tests do not fail the run.
pub fn full_status(suite: &Suite, interrupted: bool, timed_out: bool) -> FullStatus {
    if interrupted {
        return FullStatus::Interrupted;
    }
    if timed_out {
        return FullStatus::Timedout;
    }
    let failed = suite
        .all_tests()
        .iter()
        .any(|test| test.outcome() == TestOutcome::Unexpected);
    if failed {
        FullStatus::Failed
    } else {
        FullStatus::Passed
    }
}
