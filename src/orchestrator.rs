//! Check orchestrator for coordinating a full run
//!
//! Workflow: interpreter version → package inspection → package verdicts → finish report

use crate::check::{check_interpreter, check_packages};
use crate::config::CheckConfig;
use crate::domain::{InterpreterCheck, PackageCheck};
use crate::error::AppError;
use crate::output::Reporter;
use crate::probe::{ModuleProbe, PythonInterpreter};
use tracing::debug;

/// Result of a full run
#[derive(Debug, Clone)]
pub struct CheckSummary {
    /// Interpreter version verdict
    pub interpreter: InterpreterCheck,
    /// Verdicts for importable packages, in requirement order
    pub packages: Vec<PackageCheck>,
    /// Required packages that could not be imported
    pub unavailable: Vec<String>,
}

impl CheckSummary {
    /// Returns true if any `[FAIL]` was reported
    pub fn has_failures(&self) -> bool {
        !self.interpreter.is_ok()
            || !self.unavailable.is_empty()
            || self.packages.iter().any(|p| !p.is_ok())
    }
}

/// Runs the checks for one configuration against one probe
pub struct Checker<P: ModuleProbe> {
    config: CheckConfig,
    probe: P,
}

impl Checker<PythonInterpreter> {
    /// Create a checker that probes the configured interpreter
    pub fn new(config: CheckConfig) -> Self {
        let probe = PythonInterpreter::new(&config.interpreter);
        Self { config, probe }
    }
}

impl<P: ModuleProbe> Checker<P> {
    /// Create a checker with a custom probe (for testing)
    pub fn with_probe(config: CheckConfig, probe: P) -> Self {
        Self { config, probe }
    }

    /// Run every check, streaming results to `reporter`
    pub fn run(&self, reporter: &mut Reporter<'_>) -> Result<CheckSummary, AppError> {
        let interpreter = check_interpreter(&self.probe, &self.config.min_python, reporter)?;

        let requirements = &self.config.requirements;
        let (packages, unavailable) = if self.config.python_only || requirements.is_empty() {
            debug!("skipping package checks");
            (Vec::new(), Vec::new())
        } else {
            let packages = check_packages(&self.probe, requirements, reporter)?;
            let unavailable = requirements
                .iter()
                .filter(|r| !packages.iter().any(|p| p.name == r.name))
                .map(|r| r.name.clone())
                .collect();
            (packages, unavailable)
        };

        reporter.finish()?;

        Ok(CheckSummary {
            interpreter,
            packages,
            unavailable,
        })
    }
}
