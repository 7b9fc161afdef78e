//! Reporter hooks and the JSON report writer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, instrument, warn};

use crate::schema::{FullConfig, FullResult, RunReport, Suite, TestCase, TestError, TestResult};

/// Receives run lifecycle events. Every hook is optional.
pub trait Reporter {
    fn on_begin(&mut self, _config: &FullConfig, _suite: &Suite) {}

    fn on_test_begin(&mut self, _test: &TestCase) {}

    fn on_std_out(&mut self, _chunk: &str, _test: Option<&TestCase>) {}

    fn on_std_err(&mut self, _chunk: &str, _test: Option<&TestCase>) {}

    fn on_test_end(&mut self, _test: &TestCase, _result: &TestResult) {}

    /// A failure outside any test (e.g. in global setup).
    fn on_error(&mut self, _error: &TestError) {}

    fn on_end(&mut self, _result: &FullResult) -> Result<()> {
        Ok(())
    }
}

/// Collects results in memory and writes a [`RunReport`] at the end of the run.
#[derive(Debug)]
pub struct JsonReporter {
    output_path: PathBuf,
    config: Option<FullConfig>,
    suite: Option<Suite>,
    errors: Vec<TestError>,
}

impl JsonReporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            config: None,
            suite: None,
            errors: Vec::new(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Reporter for JsonReporter {
    fn on_begin(&mut self, config: &FullConfig, suite: &Suite) {
        debug!(tests = suite.all_tests().len(), "run began");
        self.config = Some(config.clone());
        self.suite = Some(suite.clone());
    }

    fn on_test_end(&mut self, test: &TestCase, result: &TestResult) {
        let Some(suite) = self.suite.as_mut() else {
            warn!(title = %test.title, "test ended before run began");
            return;
        };
        match suite.find_test_mut(&test.location, &test.title) {
            Some(recorded) => recorded.results.push(result.clone()),
            None => {
                warn!(title = %test.title, "test not found in suite");
                self.errors.push(TestError::from_message(format!(
                    "unknown test \"{}\" at {}:{}",
                    test.title, test.location.file, test.location.line
                )));
            }
        }
    }

    fn on_error(&mut self, error: &TestError) {
        self.errors.push(error.clone());
    }

    /// Write the collected run. Collected state is kept when the write fails,
    /// so `on_end` can be retried.
    #[instrument(skip_all, fields(path = %self.output_path.display()))]
    fn on_end(&mut self, result: &FullResult) -> Result<()> {
        let (Some(config), Some(suite)) = (&self.config, &self.suite) else {
            return Err(anyhow!("run ended before it began"));
        };
        let report = RunReport {
            config: config.clone(),
            suite: suite.clone(),
            errors: self.errors.clone(),
            status: result.status,
        };
        write_report(&self.output_path, &report)?;
        info!(status = ?report.status, "report written");

        self.config = None;
        self.suite = None;
        self.errors.clear();
        Ok(())
    }
}

/// Atomically write a report as pretty JSON with a trailing newline.
pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let mut buf = serde_json::to_string_pretty(report).context("serialize report")?;
    buf.push('\n');
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, buf)
        .with_context(|| format!("write temp report {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace report {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FullStatus, TestStatus};
    use crate::test_support::{config, result, test_case};

    fn suite() -> Suite {
        let mut suite = Suite::new("");
        suite.tests.push(test_case("a", 1));
        suite.tests.push(test_case("b", 2));
        suite
    }

    #[test]
    fn writes_results_under_matching_tests() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out/report.json");
        let mut reporter = JsonReporter::new(&path);
        let suite = suite();

        reporter.on_begin(&config(), &suite);
        reporter.on_test_end(&suite.tests[1], &result(TestStatus::Failed));
        reporter
            .on_end(&FullResult {
                status: FullStatus::Failed,
            })
            .expect("end");

        let contents = fs::read_to_string(&path).expect("read");
        let report: RunReport = serde_json::from_str(&contents).expect("parse");
        assert_eq!(report.status, FullStatus::Failed);
        assert!(report.suite.tests[0].results.is_empty());
        assert_eq!(report.suite.tests[1].results.len(), 1);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn unknown_test_is_recorded_as_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("report.json");
        let mut reporter = JsonReporter::new(&path);
        reporter.on_begin(&config(), &suite());
        reporter.on_test_end(&test_case("ghost", 99), &result(TestStatus::Passed));
        reporter
            .on_end(&FullResult {
                status: FullStatus::Passed,
            })
            .expect("end");

        let report: RunReport =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(report.errors.len(), 1);
        assert!(
            report.errors[0]
                .message
                .as_deref()
                .is_some_and(|message| message.contains("ghost"))
        );
    }

    #[test]
    fn failed_write_keeps_collected_run_for_retry() {
        let temp = tempfile::tempdir().expect("tempdir");
        let blocker = temp.path().join("out");
        fs::write(&blocker, "not a directory").expect("blocker");
        let path = blocker.join("report.json");
        let mut reporter = JsonReporter::new(&path);
        let suite = suite();
        let end = FullResult {
            status: FullStatus::Failed,
        };

        reporter.on_begin(&config(), &suite);
        reporter.on_test_end(&suite.tests[0], &result(TestStatus::Failed));
        reporter.on_error(&TestError::from_message("global setup failed"));
        let err = reporter.on_end(&end).expect_err("parent is a file");
        assert!(format!("{err:#}").contains("create directory"));

        fs::remove_file(&blocker).expect("remove blocker");
        reporter.on_end(&end).expect("retry");

        let report: RunReport =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(report.suite.tests[0].results.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].message.as_deref(),
            Some("global setup failed")
        );
    }

    #[test]
    fn successful_end_resets_the_run() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut reporter = JsonReporter::new(temp.path().join("report.json"));
        let end = FullResult {
            status: FullStatus::Passed,
        };
        reporter.on_begin(&config(), &suite());
        reporter.on_end(&end).expect("end");
        let err = reporter.on_end(&end).expect_err("already ended");
        assert!(err.to_string().contains("before it began"));
    }

    #[test]
    fn end_without_begin_fails() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut reporter = JsonReporter::new(temp.path().join("report.json"));
        let err = reporter
            .on_end(&FullResult {
                status: FullStatus::Passed,
            })
            .expect_err("no begin");
        assert!(err.to_string().contains("before it began"));
    }
}
