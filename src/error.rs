//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: Issues with version string parsing
//! - ProbeError: Issues talking to the Python interpreter
//! - ConfigError: Issues with requirement files and CLI configuration
//! - Output: failures writing the report

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version parsing errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Interpreter probe errors
    #[error(transparent)]
    Probe(#[from] ProbeError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the report failed
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors related to version strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// String does not follow the dotted version grammar
    #[error("invalid version '{input}'")]
    Invalid { input: String },

    /// A numeric component does not fit in 64 bits
    #[error("version component out of range in '{input}'")]
    Overflow { input: String },
}

/// Errors related to running the interpreter helper
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The interpreter binary could not be started
    #[error("failed to launch Python interpreter '{interpreter}': {source}")]
    Spawn {
        interpreter: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The helper script exited with a non-zero status
    #[error("Python interpreter '{interpreter}' exited with {status}: {stderr}")]
    Failed {
        interpreter: PathBuf,
        status: String,
        stderr: String,
    },

    /// The helper script printed something other than the expected JSON
    #[error("unexpected output from Python interpreter '{interpreter}': {message}")]
    InvalidOutput {
        interpreter: PathBuf,
        message: String,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Requirement file could not be read
    #[error("failed to read requirement file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Requirement file is not valid TOML
    #[error("failed to parse TOML in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A value in the requirement file has the wrong type
    #[error("invalid value for '{key}' in {path}: expected a version string")]
    InvalidValue { path: PathBuf, key: String },

    /// The same package was listed twice
    #[error("duplicate requirement for package '{name}'")]
    DuplicatePackage { name: String },

    /// A `--require` argument is not of the form NAME=VERSION
    #[error("invalid requirement '{value}': expected NAME=VERSION")]
    InvalidRequirement { value: String },

    /// A minimum version does not parse
    #[error("invalid minimum version for '{name}': {source}")]
    InvalidMinimum {
        name: String,
        #[source]
        source: VersionError,
    },
}

impl VersionError {
    /// Creates a new Invalid error
    pub fn invalid(input: impl Into<String>) -> Self {
        VersionError::Invalid {
            input: input.into(),
        }
    }

    /// Creates a new Overflow error
    pub fn overflow(input: impl Into<String>) -> Self {
        VersionError::Overflow {
            input: input.into(),
        }
    }
}

impl ProbeError {
    /// Creates a new Spawn error
    pub fn spawn(interpreter: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProbeError::Spawn {
            interpreter: interpreter.into(),
            source,
        }
    }

    /// Creates a new InvalidOutput error
    pub fn invalid_output(interpreter: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ProbeError::InvalidOutput {
            interpreter: interpreter.into(),
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Parse error
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidMinimum error
    pub fn invalid_minimum(name: impl Into<String>, source: VersionError) -> Self {
        ConfigError::InvalidMinimum {
            name: name.into(),
            source,
        }
    }
}
