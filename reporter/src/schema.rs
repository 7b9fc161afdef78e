//! Test-run result schema.
//!
//! Serialized as camelCase JSON; `schemas/report/v1.schema.json` describes the
//! same shape for persisted reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

/// Status of a single test attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestStatus {
    Passed,
    Failed,
    TimedOut,
    Skipped,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Rendered value when something other than an error was thrown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl TestError {
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub content_type: String,
}

/// One execution (attempt or retry) of a test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub retry: u32,
    pub worker_index: u32,
    pub start_time: DateTime<Utc>,
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    pub status: TestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<TestError>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub stdout: Vec<String>,
    #[serde(default)]
    pub stderr: Vec<String>,
}

impl TestResult {
    /// A passing result that later assertions may still fail.
    pub fn started(retry: u32, worker_index: u32, start_time: DateTime<Utc>) -> Self {
        Self {
            retry,
            worker_index,
            start_time,
            duration_ms: 0,
            status: TestStatus::Passed,
            error: None,
            attachments: Vec::new(),
            stdout: Vec::new(),
            stderr: Vec::new(),
        }
    }
}

/// Verdict for a test across all of its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestOutcome {
    Skipped,
    Expected,
    Unexpected,
    Flaky,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub title: String,
    pub location: Location,
    pub expected_status: TestStatus,
    #[serde(rename = "timeout")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub retries: u32,
    #[serde(default)]
    pub results: Vec<TestResult>,
}

impl TestCase {
    /// Skipped results are ignored; the remaining ones decide the verdict.
    pub fn outcome(&self) -> TestOutcome {
        let mut ran = self
            .results
            .iter()
            .filter(|result| result.status != TestStatus::Skipped)
            .peekable();
        if ran.peek().is_none() {
            return TestOutcome::Skipped;
        }
        let (matching, total) = ran.fold((0usize, 0usize), |(matching, total), result| {
            let hit = usize::from(result.status == self.expected_status);
            (matching + hit, total + 1)
        });
        if matching == total {
            TestOutcome::Expected
        } else if matching > 0 {
            TestOutcome::Flaky
        } else {
            TestOutcome::Unexpected
        }
    }

    pub fn ok(&self) -> bool {
        matches!(
            self.outcome(),
            TestOutcome::Expected | TestOutcome::Flaky | TestOutcome::Skipped
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default)]
    pub suites: Vec<Suite>,
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

impl Suite {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: None,
            suites: Vec::new(),
            tests: Vec::new(),
        }
    }

    /// All tests, depth-first: a suite's own tests before its child suites.
    pub fn all_tests(&self) -> Vec<&TestCase> {
        let mut out = Vec::new();
        self.collect_tests(&mut out);
        out
    }

    fn collect_tests<'a>(&'a self, out: &mut Vec<&'a TestCase>) {
        out.extend(self.tests.iter());
        for suite in &self.suites {
            suite.collect_tests(out);
        }
    }

    /// Every test paired with its title path (empty suite titles skipped).
    pub fn title_paths(&self) -> Vec<(Vec<String>, &TestCase)> {
        let mut out = Vec::new();
        self.collect_title_paths(&mut Vec::new(), &mut out);
        out
    }

    fn collect_title_paths<'a>(
        &'a self,
        prefix: &mut Vec<String>,
        out: &mut Vec<(Vec<String>, &'a TestCase)>,
    ) {
        let pushed = !self.title.is_empty();
        if pushed {
            prefix.push(self.title.clone());
        }
        for test in &self.tests {
            let mut path = prefix.clone();
            path.push(test.title.clone());
            out.push((path, test));
        }
        for suite in &self.suites {
            suite.collect_title_paths(prefix, out);
        }
        if pushed {
            prefix.pop();
        }
    }

    /// Locate a test by source location and title.
    pub fn find_test_mut(&mut self, location: &Location, title: &str) -> Option<&mut TestCase> {
        if let Some(index) = self
            .tests
            .iter()
            .position(|test| test.location == *location && test.title == title)
        {
            return self.tests.get_mut(index);
        }
        self.suites
            .iter_mut()
            .find_map(|suite| suite.find_test_mut(location, title))
    }
}

/// Status of the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FullStatus {
    /// Everything went as expected.
    Passed,
    /// Any test has failed.
    Failed,
    /// The global time limit was reached.
    Timedout,
    /// Interrupted by the user.
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullResult {
    pub status: FullStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullConfig {
    pub root_dir: String,
    pub workers: u32,
    /// Whole-run time limit (`0` = unbounded).
    pub global_timeout_ms: u64,
}

/// Persisted report written at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub config: FullConfig,
    pub suite: Suite,
    #[serde(default)]
    pub errors: Vec<TestError>,
    pub status: FullStatus,
}
