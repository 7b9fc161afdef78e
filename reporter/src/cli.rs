//! CLI command implementations.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::summary::summarize;
use crate::validate::load_report;

/// Validate a report file against the schema.
pub fn validate_report(path: &Path) -> Result<()> {
    let report = load_report(path)?;
    debug!(tests = report.suite.all_tests().len(), "report valid");
    println!("validate: ok path={}", path.display());
    Ok(())
}

/// Print aggregated counts for a report file.
pub fn summarize_report(path: &Path) -> Result<()> {
    let report = load_report(path)?;
    let summary = summarize(&report);
    println!(
        "summary: status={:?} tests={}",
        summary.status, summary.tests
    );
    println!(
        "summary: expected={} unexpected={} flaky={} skipped={}",
        summary.expected, summary.unexpected, summary.flaky, summary.skipped
    );
    if let Some(avg) = summary.avg_duration_ms {
        println!("summary: avg_duration_ms={:.2}", avg);
    }
    for error in &report.errors {
        if let Some(message) = &error.message {
            eprintln!("error: {}", message);
        }
    }
    Ok(())
}
