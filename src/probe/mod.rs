//! Module probing for a Python interpreter
//!
//! This module provides:
//! - The `ModuleProbe` trait used by the checks to ask about the interpreter and its modules
//! - The ordered list of version attributes tried on an imported module
//! - `PythonInterpreter`, which answers by running a helper script in a child process

mod python;

pub use python::{PythonInterpreter, DEFAULT_INTERPRETER};

use crate::domain::UNKNOWN_VERSION;
use crate::error::ProbeError;
use serde::Deserialize;

/// Version details reported by the interpreter itself
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterpreterInfo {
    /// Short version, e.g. `3.11.4`
    pub version: String,
    /// Full `sys.version` string, including build and platform details
    #[serde(rename = "full")]
    pub full_version: String,
}

/// A version-like attribute value exposed by a module
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttributeValue {
    /// Attribute name, e.g. `__version__`
    pub name: String,
    /// `str()` of the value
    pub text: String,
    /// Items of the value when it is a tuple or list
    #[serde(default)]
    pub parts: Option<Vec<serde_json::Value>>,
}

impl AttributeValue {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            parts: None,
        }
    }

    /// Attaches tuple items (builder pattern)
    pub fn with_parts(mut self, parts: Vec<serde_json::Value>) -> Self {
        self.parts = Some(parts);
        self
    }

    /// Renders the value as a version string
    ///
    /// Tuple-like values such as `(3, 7, 1, 'final', 0)` become `3.7.1`: the
    /// leading integer items joined with dots. Anything else uses `text`.
    pub fn version_text(&self) -> String {
        if let Some(parts) = &self.parts {
            let numbers: Vec<String> = parts
                .iter()
                .map_while(|p| p.as_u64())
                .map(|n| n.to_string())
                .collect();
            if !numbers.is_empty() {
                return numbers.join(".");
            }
        }
        self.text.clone()
    }
}

/// Result of asking the interpreter to import a module
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    /// Import succeeded; carries the first requested attribute the module exposes, if any
    Imported(Vec<AttributeValue>),
    /// Import raised; carries the error message
    Failed(String),
}

/// Attributes a module may use to expose its version, in lookup order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionAttribute {
    /// `__version__`
    Dunder,
    /// `version`
    Version,
    /// `version_info`
    VersionInfo,
}

impl VersionAttribute {
    /// Lookup order; the first attribute present wins
    pub const ORDER: [VersionAttribute; 3] = [
        VersionAttribute::Dunder,
        VersionAttribute::Version,
        VersionAttribute::VersionInfo,
    ];

    /// Python attribute name
    pub fn attribute_name(&self) -> &'static str {
        match self {
            VersionAttribute::Dunder => "__version__",
            VersionAttribute::Version => "version",
            VersionAttribute::VersionInfo => "version_info",
        }
    }

    /// Picks the version from the attributes a module exposes
    ///
    /// Stops at the first attribute in `ORDER` that is present and returns
    /// `"0.0"` when none is.
    pub fn select(attributes: &[AttributeValue]) -> String {
        Self::ORDER
            .iter()
            .find_map(|attr| {
                attributes
                    .iter()
                    .find(|a| a.name == attr.attribute_name())
            })
            .map(AttributeValue::version_text)
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string())
    }
}

/// Trait for asking an interpreter about itself and its modules
pub trait ModuleProbe {
    /// Report the interpreter's own version
    fn interpreter(&self) -> Result<InterpreterInfo, ProbeError>;

    /// Try to import `module` and report the first of `attributes` it exposes
    fn import(
        &self,
        module: &str,
        attributes: &[VersionAttribute],
    ) -> Result<ImportOutcome, ProbeError>;
}
