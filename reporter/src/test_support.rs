//! Test-only helpers for constructing report fixtures.

use chrono::{TimeZone, Utc};

use crate::schema::{FullConfig, Location, TestCase, TestResult, TestStatus};

/// Deterministic result with the given status and a 10ms duration.
pub fn result(status: TestStatus) -> TestResult {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp");
    TestResult {
        status,
        duration_ms: 10,
        ..TestResult::started(0, 0, start)
    }
}

/// Test case expected to pass, located at `tests/example.spec:<line>:1`.
pub fn test_case(title: &str, line: u32) -> TestCase {
    TestCase {
        title: title.to_string(),
        location: Location {
            file: "tests/example.spec".to_string(),
            line,
            column: 1,
        },
        expected_status: TestStatus::Passed,
        timeout_ms: 30_000,
        annotations: Vec::new(),
        retries: 0,
        results: Vec::new(),
    }
}

pub fn config() -> FullConfig {
    FullConfig {
        root_dir: "/work".to_string(),
        workers: 1,
        global_timeout_ms: 0,
    }
}
