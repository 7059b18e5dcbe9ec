//! JSON output formatter for machine processing
//!
//! Results are collected while the checks run and written as one document
//! from `finish`.

use crate::domain::{InterpreterCheck, PackageCheck, Version};
use crate::output::OutputFormatter;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter {
    interpreter: Option<JsonInterpreter>,
    packages: Vec<JsonPackage>,
    unavailable: Vec<String>,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self::default()
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    checked_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interpreter: Option<&'a JsonInterpreter>,
    packages: &'a [JsonPackage],
    unavailable: &'a [String],
}

/// JSON representation of the interpreter check
#[derive(Serialize)]
struct JsonInterpreter {
    version: Version,
    full_version: String,
    minimum: Version,
    ok: bool,
}

/// JSON representation of a package check
#[derive(Serialize)]
struct JsonPackage {
    name: String,
    minimum: Version,
    actual: String,
    status: &'static str,
}

impl OutputFormatter for JsonFormatter {
    fn interpreter(
        &mut self,
        check: &InterpreterCheck,
        _writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.interpreter = Some(JsonInterpreter {
            version: check.version.clone(),
            full_version: check.full_version.clone(),
            minimum: check.minimum.clone(),
            ok: check.is_ok(),
        });
        Ok(())
    }

    fn import_failure(&mut self, name: &str, _writer: &mut dyn Write) -> std::io::Result<()> {
        self.unavailable.push(name.to_string());
        Ok(())
    }

    fn package(&mut self, check: &PackageCheck, _writer: &mut dyn Write) -> std::io::Result<()> {
        self.packages.push(JsonPackage {
            name: check.name.clone(),
            minimum: check.minimum.clone(),
            actual: check.status.actual(),
            status: check.status.label(),
        });
        Ok(())
    }

    fn finish(&mut self, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            checked_at: Utc::now(),
            interpreter: self.interpreter.as_ref(),
            packages: &self.packages,
            unavailable: &self.unavailable,
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
