use crate::schema::{FullStatus, RunReport, TestOutcome};

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub tests: usize,
    pub expected: usize,
    pub unexpected: usize,
    pub flaky: usize,
    pub skipped: usize,
    /// Mean duration over every recorded result, retries included.
    pub avg_duration_ms: Option<f64>,
    pub status: FullStatus,
}

pub fn summarize(report: &RunReport) -> ReportSummary {
    let mut summary = ReportSummary {
        tests: 0,
        expected: 0,
        unexpected: 0,
        flaky: 0,
        skipped: 0,
        avg_duration_ms: None,
        status: report.status,
    };
    let mut results = 0usize;

    for test in report.suite.all_tests() {
        summary.tests += 1;
        match test.outcome() {
            TestOutcome::Expected => summary.expected += 1,
            TestOutcome::Unexpected => summary.unexpected += 1,
            TestOutcome::Flaky => summary.flaky += 1,
            TestOutcome::Skipped => summary.skipped += 1,
        }

        for result in &test.results {
            results += 1;
            let duration = result.duration_ms as f64;
            summary.avg_duration_ms = Some(match summary.avg_duration_ms {
                None => duration,
                Some(avg) => {
                    let total = avg * (results as f64 - 1.0) + duration;
                    total / results as f64
                }
            });
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Suite, TestStatus};
    use crate::test_support::{config, result, test_case};

    #[test]
    fn counts_outcomes_and_averages_durations() {
        let mut passing = test_case("passing", 1);
        let mut first = result(TestStatus::Passed);
        first.duration_ms = 20;
        passing.results.push(first);

        let mut flaky = test_case("flaky", 2);
        flaky.results.push(result(TestStatus::Failed));
        flaky.results.push(result(TestStatus::Passed));

        let mut nested = Suite::new("nested");
        let mut broken = test_case("broken", 3);
        broken.results.push(result(TestStatus::TimedOut));
        nested.tests.push(broken);
        nested.tests.push(test_case("never ran", 4));

        let mut suite = Suite::new("");
        suite.tests.push(passing);
        suite.tests.push(flaky);
        suite.suites.push(nested);

        let report = RunReport {
            config: config(),
            suite,
            errors: Vec::new(),
            status: FullStatus::Failed,
        };
        let summary = summarize(&report);
        assert_eq!(summary.tests, 4);
        assert_eq!(summary.expected, 1);
        assert_eq!(summary.flaky, 1);
        assert_eq!(summary.unexpected, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.avg_duration_ms, Some(12.5));
        assert_eq!(summary.status, FullStatus::Failed);
    }

    #[test]
    fn empty_report_has_no_average() {
        let report = RunReport {
            config: config(),
            suite: Suite::new(""),
            errors: Vec::new(),
            status: FullStatus::Passed,
        };
        let summary = summarize(&report);
        assert_eq!(summary.tests, 0);
        assert_eq!(summary.avg_duration_ms, None);
    }
}
