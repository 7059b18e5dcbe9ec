//! Output formatting for check results
//!
//! This module provides:
//! - Text output, one `[OK]`/`[FAIL]` line per item as soon as it is known
//! - JSON output for machine processing, written once all checks are done

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::{InterpreterCheck, PackageCheck};
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only failures
    Quiet,
    /// Every check
    #[default]
    Normal,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Whether to use colors
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            verbosity: Verbosity::default(),
            color: false,
        }
    }
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, quiet: bool, color: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        let verbosity = if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        };

        Self {
            format,
            verbosity,
            color,
        }
    }
}

/// Trait for output formatters
///
/// Checks call these in the order results become known. Formatters may write
/// immediately or buffer until `finish`.
pub trait OutputFormatter {
    /// Report the interpreter version check
    fn interpreter(
        &mut self,
        check: &InterpreterCheck,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Report a package that could not be imported
    fn import_failure(&mut self, name: &str, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Report a package compared against its minimum
    fn package(&mut self, check: &PackageCheck, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Called once after all checks
    fn finish(&mut self, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(config.verbosity, config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

/// A formatter bound to its destination
pub struct Reporter<'w> {
    formatter: Box<dyn OutputFormatter>,
    writer: &'w mut dyn Write,
}

impl<'w> Reporter<'w> {
    pub fn new(formatter: Box<dyn OutputFormatter>, writer: &'w mut dyn Write) -> Self {
        Self { formatter, writer }
    }

    pub fn interpreter(&mut self, check: &InterpreterCheck) -> std::io::Result<()> {
        self.formatter.interpreter(check, self.writer)?;
        self.writer.flush()
    }

    pub fn import_failure(&mut self, name: &str) -> std::io::Result<()> {
        self.formatter.import_failure(name, self.writer)?;
        self.writer.flush()
    }

    pub fn package(&mut self, check: &PackageCheck) -> std::io::Result<()> {
        self.formatter.package(check, self.writer)?;
        self.writer.flush()
    }

    pub fn finish(&mut self) -> std::io::Result<()> {
        self.formatter.finish(self.writer)?;
        self.writer.flush()
    }
}
