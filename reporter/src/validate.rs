//! Load persisted reports with schema validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use jsonschema::Draft;
use serde_json::Value;

use crate::schema::RunReport;

pub const REPORT_SCHEMA: &str = include_str!("../schemas/report/v1.schema.json");

/// Read, validate and deserialize a report file.
pub fn load_report(path: &Path) -> Result<RunReport> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_report(&raw).with_context(|| format!("load report {}", path.display()))
}

/// Validate raw JSON against the report schema, then deserialize it.
pub fn parse_report(raw: &str) -> Result<RunReport> {
    let instance: Value = serde_json::from_str(raw).context("parse report json")?;
    let schema: Value = serde_json::from_str(REPORT_SCHEMA).context("parse report schema")?;
    validate_schema(&instance, &schema)?;
    serde_json::from_value(instance).context("deserialize report")
}

/// Validate JSON instance against a JSON Schema (Draft 2020-12).
fn validate_schema(instance: &Value, schema: &Value) -> Result<()> {
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .context("compile json schema")?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        bail!("schema validation failed:\n- {}", messages.join("\n- "));
    }
    Ok(())
}
