//! Package inspection: import each package and read its version
//!
//! Import failures are reported as they happen and recorded as the `"N/A"`
//! sentinel. The result is parallel to the input: same length, same order.

use crate::domain::Resolution;
use crate::error::AppError;
use crate::output::Reporter;
use crate::probe::{ImportOutcome, ModuleProbe, VersionAttribute};
use tracing::{debug, warn};

/// Resolve one package without reporting anything
pub fn resolve_package<P: ModuleProbe + ?Sized>(probe: &P, name: &str) -> Resolution {
    match probe.import(name, &VersionAttribute::ORDER) {
        Ok(ImportOutcome::Imported(attributes)) => {
            let version = VersionAttribute::select(&attributes);
            debug!(package = name, %version, "package imported");
            Resolution::Found(version)
        }
        Ok(ImportOutcome::Failed(message)) => {
            debug!(package = name, %message, "import failed");
            Resolution::Unavailable
        }
        Err(e) => {
            warn!(package = name, error = %e, "could not probe package");
            Resolution::Unavailable
        }
    }
}

/// Inspect `names` in order, reporting each package that cannot be imported
pub fn get_packages<P: ModuleProbe + ?Sized>(
    probe: &P,
    names: &[&str],
    reporter: &mut Reporter<'_>,
) -> Result<Vec<Resolution>, AppError> {
    let mut versions = Vec::with_capacity(names.len());
    for name in names {
        let resolution = resolve_package(probe, name);
        if !resolution.is_available() {
            reporter.import_failure(name)?;
        }
        versions.push(resolution);
    }
    Ok(versions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{create_formatter, OutputConfig};
    use crate::probe::mock::MockProbe;
    use crate::probe::AttributeValue;
    use serde_json::json;

    fn inspect(probe: &MockProbe, names: &[&str]) -> (Vec<Resolution>, String) {
        let mut buf = Vec::new();
        let versions = {
            let mut reporter = Reporter::new(create_formatter(&OutputConfig::default()), &mut buf);
            get_packages(probe, names, &mut reporter).unwrap()
        };
        (versions, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_found_packages() {
        let probe = MockProbe::new("3.11.4")
            .with_module("numpy", "1.25.0")
            .with_module("scipy", "1.11.1");
        let (versions, out) = inspect(&probe, &["numpy", "scipy"]);
        assert_eq!(
            versions,
            vec![
                Resolution::Found("1.25.0".into()),
                Resolution::Found("1.11.1".into())
            ]
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_package_yields_sentinel_and_one_line() {
        let probe = MockProbe::new("3.11.4");
        let (versions, out) = inspect(&probe, &["foo"]);
        assert_eq!(versions, vec![Resolution::Unavailable]);
        assert_eq!(versions[0].to_string(), "N/A");
        assert_eq!(
            out,
            "[FAIL]: foo is not installed and/or cannot be imported.\n"
        );
    }

    #[test]
    fn test_order_preserved_around_failures() {
        let probe = MockProbe::new("3.11.4")
            .with_module("numpy", "1.25.0")
            .with_module("pandas", "2.0.3");
        let (versions, out) = inspect(&probe, &["missing1", "numpy", "missing2", "pandas"]);
        assert_eq!(
            versions,
            vec![
                Resolution::Unavailable,
                Resolution::Found("1.25.0".into()),
                Resolution::Unavailable,
                Resolution::Found("2.0.3".into()),
            ]
        );
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("missing1"));
        assert!(lines[1].contains("missing2"));
    }

    #[test]
    fn test_no_version_attribute_defaults() {
        let probe = MockProbe::new("3.11.4").with_attributes("plainmod", vec![]);
        let (versions, _) = inspect(&probe, &["plainmod"]);
        assert_eq!(versions, vec![Resolution::Found("0.0".into())]);
    }

    #[test]
    fn test_version_info_fallback() {
        let probe = MockProbe::new("3.11.4").with_attributes(
            "oldmod",
            vec![AttributeValue::new("version_info", "(2, 3, 1)")
                .with_parts(vec![json!(2), json!(3), json!(1)])],
        );
        let (versions, _) = inspect(&probe, &["oldmod"]);
        assert_eq!(versions, vec![Resolution::Found("2.3.1".into())]);
    }

    #[test]
    fn test_probe_error_treated_as_unavailable() {
        let probe = MockProbe::new("3.11.4").with_broken("crashy");
        let (versions, out) = inspect(&probe, &["crashy"]);
        assert_eq!(versions, vec![Resolution::Unavailable]);
        assert!(out.contains("crashy is not installed"));
    }

    #[test]
    fn test_repeated_inspection_is_identical() {
        let probe = MockProbe::new("3.11.4")
            .with_module("numpy", "1.25.0")
            .with_attributes("plainmod", vec![]);
        let names = ["numpy", "foo", "plainmod"];
        let (first, _) = inspect(&probe, &names);
        let (second, _) = inspect(&probe, &names);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let probe = MockProbe::new("3.11.4");
        let (versions, out) = inspect(&probe, &[]);
        assert!(versions.is_empty());
        assert!(out.is_empty());
    }
}
