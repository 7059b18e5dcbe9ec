//! Package requirement structures

use super::Version;
use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;

/// Built-in requirements for the tutorial environment, in display order
pub const DEFAULT_REQUIREMENTS: &[(&str, &str)] = &[
    ("numpy", "1.24.3"),
    ("scipy", "1.10.1"),
    ("pandas", "2.0.2"),
    ("matplotlib", "3.7.1"),
    ("flopy", "3.3.0"),
    ("gstools", "1.3.0"),
    ("jupyterlab", "4.0"),
    ("ipywidgets", "8.0.6"),
];

/// Minimum interpreter version checked by default
pub const DEFAULT_MIN_PYTHON: &str = "3.8";

/// A package together with the lowest acceptable version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    /// Importable package name
    pub name: String,
    /// Minimum version
    pub minimum: Version,
}

impl Requirement {
    /// Creates a requirement, validating the minimum version
    pub fn new(name: impl Into<String>, minimum: &str) -> Result<Self, ConfigError> {
        let name = name.into();
        let minimum =
            Version::parse(minimum).map_err(|e| ConfigError::invalid_minimum(&name, e))?;
        Ok(Self { name, minimum })
    }

    /// Parses a `NAME=VERSION` (or `NAME>=VERSION`) argument
    pub fn from_assignment(value: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidRequirement {
            value: value.to_string(),
        };
        let (name, minimum) = value
            .split_once(">=")
            .or_else(|| value.split_once('='))
            .ok_or_else(invalid)?;
        let name = name.trim();
        if name.is_empty() || minimum.trim().is_empty() {
            return Err(invalid());
        }
        Self::new(name, minimum)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>={}", self.name, self.minimum)
    }
}

/// Ordered set of requirements with unique package names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSet {
    requirements: Vec<Requirement>,
}

impl RequirementSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in tutorial requirements
    pub fn defaults() -> Self {
        let requirements = DEFAULT_REQUIREMENTS
            .iter()
            .map(|(name, minimum)| Requirement {
                name: (*name).to_string(),
                minimum: Version::parse(minimum).unwrap(),
            })
            .collect();
        Self { requirements }
    }

    /// Appends a requirement; a name may only appear once
    pub fn push(&mut self, requirement: Requirement) -> Result<(), ConfigError> {
        if self.get(&requirement.name).is_some() {
            return Err(ConfigError::DuplicatePackage {
                name: requirement.name,
            });
        }
        self.requirements.push(requirement);
        Ok(())
    }

    /// Replaces the minimum of an existing entry in place, or appends a new one
    pub fn upsert(&mut self, requirement: Requirement) {
        match self
            .requirements
            .iter_mut()
            .find(|r| r.name == requirement.name)
        {
            Some(existing) => existing.minimum = requirement.minimum,
            None => self.requirements.push(requirement),
        }
    }

    /// Looks up a requirement by package name
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.name == name)
    }

    /// Package names in order
    pub fn names(&self) -> Vec<&str> {
        self.requirements.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}
