//! Check configuration
//!
//! Combines the built-in requirements, an optional TOML requirement file and
//! CLI overrides into one `CheckConfig`:
//!
//! ```toml
//! [python]
//! minimum = "3.9"
//!
//! [packages]
//! numpy = "1.24.3"
//! scipy = "1.10.1"
//! ```
//!
//! A `[packages]` table replaces the built-in set and keeps file order.

use crate::cli::CliArgs;
use crate::domain::{Requirement, RequirementSet, Version, DEFAULT_MIN_PYTHON};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

/// Contents of a requirement file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementFile {
    /// `[python].minimum`
    pub min_python: Option<Version>,
    /// `[packages]`, if present
    pub packages: Option<RequirementSet>,
}

impl RequirementFile {
    /// Read and parse a requirement file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse requirement file content; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let table: Table =
            toml::from_str(content).map_err(|e| ConfigError::parse(path, e.to_string()))?;

        let min_python = match table.get("python") {
            Some(Value::Table(python)) => match python.get("minimum") {
                Some(value) => {
                    let minimum = version_string(value, path, "python.minimum")?;
                    Some(
                        Version::parse(minimum)
                            .map_err(|e| ConfigError::invalid_minimum("python", e))?,
                    )
                }
                None => None,
            },
            Some(_) => return Err(invalid_value(path, "python")),
            None => None,
        };

        let packages = match table.get("packages") {
            Some(Value::Table(packages)) => {
                let mut set = RequirementSet::new();
                for (name, value) in packages {
                    let minimum = version_string(value, path, &format!("packages.{}", name))?;
                    set.push(Requirement::new(name.as_str(), minimum)?)?;
                }
                Some(set)
            }
            Some(_) => return Err(invalid_value(path, "packages")),
            None => None,
        };

        Ok(Self {
            min_python,
            packages,
        })
    }
}

fn invalid_value(path: &Path, key: &str) -> ConfigError {
    ConfigError::InvalidValue {
        path: path.to_path_buf(),
        key: key.to_string(),
    }
}

fn version_string<'a>(value: &'a Value, path: &Path, key: &str) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or_else(|| invalid_value(path, key))
}

/// Everything a check run needs
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Interpreter executable
    pub interpreter: PathBuf,
    /// Minimum interpreter version
    pub min_python: Version,
    /// Packages to check, in display order
    pub requirements: RequirementSet,
    /// Skip the package checks
    pub python_only: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from(crate::probe::DEFAULT_INTERPRETER),
            min_python: Version::parse(DEFAULT_MIN_PYTHON).unwrap(),
            requirements: RequirementSet::defaults(),
            python_only: false,
        }
    }
}

impl CheckConfig {
    /// Build the configuration from CLI arguments
    ///
    /// Precedence: CLI flags, then the requirement file, then built-in defaults.
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        let file = match &args.requirements {
            Some(path) => RequirementFile::load(path)?,
            None => RequirementFile::default(),
        };
        Ok(Self::resolve(args, file))
    }

    fn resolve(args: &CliArgs, file: RequirementFile) -> Self {
        let defaults = Self::default();

        let min_python = args
            .min_python
            .clone()
            .or(file.min_python)
            .unwrap_or(defaults.min_python);

        let mut requirements = file.packages.unwrap_or(defaults.requirements);
        for requirement in &args.require {
            requirements.upsert(requirement.clone());
        }

        Self {
            interpreter: args.python.clone(),
            min_python,
            requirements,
            python_only: args.python_only,
        }
    }
}
