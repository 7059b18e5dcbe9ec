//! Probe backed by a real Python interpreter
//!
//! Each query runs `<python> -c <helper> <mode> [args...]` and reads one JSON
//! line from stdout. Modules are imported in a fresh process each time, so a
//! module that crashes the interpreter only affects its own query.

use super::{AttributeValue, ImportOutcome, InterpreterInfo, ModuleProbe, VersionAttribute};
use crate::error::ProbeError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Interpreter used when none is configured
#[cfg(windows)]
pub const DEFAULT_INTERPRETER: &str = "python";
#[cfg(not(windows))]
pub const DEFAULT_INTERPRETER: &str = "python3";

// Anything the import prints goes to stderr so stdout only carries the report.
const HELPER_SCRIPT: &str = r#"
import contextlib, importlib, json, sys

def describe(name, value):
    entry = {"name": name, "text": str(value)}
    if isinstance(value, (tuple, list)):
        entry["parts"] = [
            p if isinstance(p, (int, str)) and not isinstance(p, bool) else str(p)
            for p in value
        ]
    return entry

def run(argv):
    if argv[0] == "interpreter":
        import platform
        return {"version": platform.python_version(), "full": sys.version}
    name = argv[1]
    try:
        with contextlib.redirect_stdout(sys.stderr):
            module = importlib.import_module(name)
    except BaseException as exc:
        return {"imported": False, "error": "%s: %s" % (type(exc).__name__, exc)}
    for attr in argv[2:]:
        try:
            entry = describe(attr, getattr(module, attr))
        except Exception:
            continue
        return {"imported": True, "attributes": [entry]}
    return {"imported": True, "attributes": []}

sys.stdout.write(json.dumps(run(sys.argv[1:])) + "\n")
"#;

/// Wire format of a module query
#[derive(Debug, Deserialize)]
struct ModuleReport {
    imported: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    attributes: Vec<AttributeValue>,
}

impl From<ModuleReport> for ImportOutcome {
    fn from(report: ModuleReport) -> Self {
        if report.imported {
            ImportOutcome::Imported(report.attributes)
        } else {
            ImportOutcome::Failed(report.error.unwrap_or_default())
        }
    }
}

/// Probe that shells out to a Python interpreter
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    /// Interpreter executable, looked up on PATH when not absolute
    path: PathBuf,
}

impl PythonInterpreter {
    /// Create a probe for the given interpreter executable
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Run the helper script and decode its JSON answer
    fn query<T: DeserializeOwned>(&self, args: &[&str]) -> Result<T, ProbeError> {
        debug!(interpreter = %self.path.display(), ?args, "running probe helper");

        let output = Command::new(&self.path)
            .arg("-c")
            .arg(HELPER_SCRIPT)
            .args(args)
            .env("PYTHONIOENCODING", "utf-8")
            .output()
            .map_err(|e| ProbeError::spawn(&self.path, e))?;

        if !output.status.success() {
            return Err(ProbeError::Failed {
                interpreter: self.path.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .ok_or_else(|| ProbeError::invalid_output(&self.path, "empty output"))?;

        serde_json::from_str(line).map_err(|e| ProbeError::invalid_output(&self.path, e.to_string()))
    }
}

impl Default for PythonInterpreter {
    fn default() -> Self {
        Self::new(DEFAULT_INTERPRETER)
    }
}

impl ModuleProbe for PythonInterpreter {
    fn interpreter(&self) -> Result<InterpreterInfo, ProbeError> {
        self.query(&["interpreter"])
    }

    fn import(
        &self,
        module: &str,
        attributes: &[VersionAttribute],
    ) -> Result<ImportOutcome, ProbeError> {
        let mut args = vec!["module", module];
        args.extend(attributes.iter().map(|a| a.attribute_name()));
        let report: ModuleReport = self.query(&args)?;
        Ok(report.into())
    }
}
