//! Check result types
//!
//! - Resolution: what the inspector learned about one package
//! - InterpreterCheck / PackageCheck: verdicts handed to the output layer

use super::Version;
use serde::Serialize;
use std::fmt;

/// Sentinel shown for packages that could not be imported
pub const NOT_AVAILABLE: &str = "N/A";

/// Version reported when a module exposes no recognized version attribute
pub const UNKNOWN_VERSION: &str = "0.0";

/// Outcome of inspecting one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Imported; carries the version-like string the module exposes
    Found(String),
    /// Import failed
    Unavailable,
}

impl Resolution {
    pub fn is_available(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Found(v) => write!(f, "{}", v),
            Resolution::Unavailable => write!(f, "{}", NOT_AVAILABLE),
        }
    }
}

/// Verdict of the interpreter version check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpreterCheck {
    /// `platform.python_version()`
    pub version: Version,
    /// `sys.version`, including build and platform details
    pub full_version: String,
    /// Required minimum
    pub minimum: Version,
}

impl InterpreterCheck {
    pub fn is_ok(&self) -> bool {
        self.version >= self.minimum
    }
}

/// Verdict for one package that could be imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageStatus {
    /// Installed version satisfies the minimum
    Ok(Version),
    /// Installed version is older than the minimum
    Outdated(Version),
    /// Module exposes a version string that does not parse
    Unrecognized(String),
}

impl PackageStatus {
    /// Label used in machine-readable output
    pub fn label(&self) -> &'static str {
        match self {
            PackageStatus::Ok(_) => "ok",
            PackageStatus::Outdated(_) => "outdated",
            PackageStatus::Unrecognized(_) => "unrecognized",
        }
    }

    /// The installed version as displayed
    pub fn actual(&self) -> String {
        match self {
            PackageStatus::Ok(v) | PackageStatus::Outdated(v) => v.to_string(),
            PackageStatus::Unrecognized(raw) => raw.clone(),
        }
    }
}

/// Result of comparing one package against its requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCheck {
    pub name: String,
    pub minimum: Version,
    pub status: PackageStatus,
}

impl PackageCheck {
    pub fn is_ok(&self) -> bool {
        matches!(self.status, PackageStatus::Ok(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_resolution_display() {
        assert_eq!(Resolution::Found("1.25.0".into()).to_string(), "1.25.0");
        assert_eq!(Resolution::Unavailable.to_string(), "N/A");
    }

    #[test]
    fn test_resolution_availability() {
        assert!(Resolution::Found("2.0".into()).is_available());
        assert!(!Resolution::Unavailable.is_available());
    }

    #[test]
    fn test_interpreter_check_boundary() {
        let check = InterpreterCheck {
            version: v("3.8.0"),
            full_version: "3.8.0 (default)".into(),
            minimum: v("3.8"),
        };
        assert!(check.is_ok());

        let check = InterpreterCheck {
            version: v("3.7.17"),
            ..check
        };
        assert!(!check.is_ok());
    }

    #[test]
    fn test_package_status_labels() {
        assert_eq!(PackageStatus::Ok(v("1.0")).label(), "ok");
        assert_eq!(PackageStatus::Outdated(v("1.0")).label(), "outdated");
        assert_eq!(
            PackageStatus::Unrecognized("weird".into()).label(),
            "unrecognized"
        );
    }

    #[test]
    fn test_package_status_actual() {
        assert_eq!(PackageStatus::Outdated(v("1.0RC1")).actual(), "1.0rc1");
        assert_eq!(PackageStatus::Unrecognized("dev".into()).actual(), "dev");
    }
}
