//! Interpreter version check

use crate::domain::{InterpreterCheck, Version};
use crate::error::{AppError, VersionError};
use crate::output::Reporter;
use crate::probe::{InterpreterInfo, ModuleProbe};
use tracing::debug;

/// Compare the interpreter's reported version against `minimum`
///
/// A malformed interpreter version is an error; interpreters always report
/// well-formed versions, so the caller treats it as fatal.
pub fn evaluate_interpreter(
    info: &InterpreterInfo,
    minimum: &Version,
) -> Result<InterpreterCheck, VersionError> {
    let version = Version::parse(&info.version)?;
    Ok(InterpreterCheck {
        version,
        full_version: info.full_version.clone(),
        minimum: minimum.clone(),
    })
}

/// Ask the interpreter for its version, judge it, and report the verdict
pub fn check_interpreter<P: ModuleProbe + ?Sized>(
    probe: &P,
    minimum: &Version,
    reporter: &mut Reporter<'_>,
) -> Result<InterpreterCheck, AppError> {
    let info = probe.interpreter()?;
    debug!(version = %info.version, full = %info.full_version, "interpreter reported");

    let check = evaluate_interpreter(&info, minimum)?;
    reporter.interpreter(&check)?;
    Ok(check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{create_formatter, OutputConfig};
    use crate::probe::mock::MockProbe;

    fn info(version: &str) -> InterpreterInfo {
        InterpreterInfo {
            version: version.to_string(),
            full_version: format!("{} (main) [Clang 14.0.6]", version),
        }
    }

    fn minimum() -> Version {
        Version::parse("3.8").unwrap()
    }

    #[test]
    fn test_versions_at_or_above_minimum_pass() {
        for version in ["3.8", "3.8.0", "3.8.18", "3.10.12", "3.12.1", "4.0"] {
            let check = evaluate_interpreter(&info(version), &minimum()).unwrap();
            assert!(check.is_ok(), "{} should pass", version);
        }
    }

    #[test]
    fn test_versions_below_minimum_fail() {
        for version in ["2.7.18", "3.6.15", "3.7.17", "3.8.0rc1"] {
            let check = evaluate_interpreter(&info(version), &minimum()).unwrap();
            assert!(!check.is_ok(), "{} should fail", version);
        }
    }

    #[test]
    fn test_malformed_version_is_error() {
        let err = evaluate_interpreter(&info("3.13.0a1+"), &minimum()).unwrap_err();
        assert!(matches!(err, VersionError::Invalid { .. }));
    }

    #[test]
    fn test_check_interpreter_reports_ok() {
        let probe = MockProbe::new("3.11.4");
        let mut buf = Vec::new();
        {
            let mut reporter = Reporter::new(create_formatter(&OutputConfig::default()), &mut buf);
            let check = check_interpreter(&probe, &minimum(), &mut reporter).unwrap();
            assert!(check.is_ok());
        }
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[OK] Your Python version is 3.11.4\n"
        );
    }

    #[test]
    fn test_check_interpreter_reports_fail() {
        let probe = MockProbe::new("3.7.1");
        let mut buf = Vec::new();
        {
            let mut reporter = Reporter::new(create_formatter(&OutputConfig::default()), &mut buf);
            check_interpreter(&probe, &minimum(), &mut reporter).unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("[FAIL] We recommend Python 3.8 or newer but found version 3.7.1 ("));
    }
}
