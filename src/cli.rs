//! CLI argument parsing module for envcheck

use crate::domain::{Requirement, Version};
use crate::probe::DEFAULT_INTERPRETER;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse a `NAME=VERSION` requirement
fn parse_requirement(s: &str) -> Result<Requirement, String> {
    Requirement::from_assignment(s).map_err(|e| e.to_string())
}

/// Parse a version such as `3.8`
fn parse_version(s: &str) -> Result<Version, String> {
    Version::parse(s).map_err(|e| e.to_string())
}

/// Python environment checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "envcheck",
    version,
    about = "Check that Python and the packages a tutorial needs are recent enough"
)]
pub struct CliArgs {
    /// Python interpreter to check
    #[arg(long, env = "ENVCHECK_PYTHON", default_value = DEFAULT_INTERPRETER)]
    pub python: PathBuf,

    /// Minimum Python version (default: 3.8)
    #[arg(long, value_parser = parse_version)]
    pub min_python: Option<Version>,

    /// TOML file with [python] and [packages] requirements
    #[arg(short = 'r', long)]
    pub requirements: Option<PathBuf>,

    /// Add or override a package requirement, e.g. numpy=1.24.3 (can be specified multiple times)
    #[arg(long, action = ArgAction::Append, value_parser = parse_requirement)]
    pub require: Vec<Requirement>,

    /// Only check the interpreter version
    #[arg(long)]
    pub python_only: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Only print failures
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Exit with status 1 when any check fails
    #[arg(long)]
    pub strict: bool,
}
