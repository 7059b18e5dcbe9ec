//! Package version check against a requirement set

use crate::check::inspector::get_packages;
use crate::domain::{PackageCheck, PackageStatus, Requirement, RequirementSet, Resolution, Version};
use crate::error::AppError;
use crate::output::Reporter;
use crate::probe::ModuleProbe;
use tracing::warn;

/// Judge one installed version against its requirement
pub fn evaluate_package(requirement: &Requirement, actual: &str) -> PackageCheck {
    let status = match Version::parse(actual) {
        Ok(version) if version < requirement.minimum => PackageStatus::Outdated(version),
        Ok(version) => PackageStatus::Ok(version),
        Err(e) => {
            warn!(package = %requirement.name, error = %e, "package reports an unrecognized version");
            PackageStatus::Unrecognized(actual.to_string())
        }
    };
    PackageCheck {
        name: requirement.name.clone(),
        minimum: requirement.minimum.clone(),
        status,
    }
}

/// Inspect every required package and report a verdict for each importable one
///
/// Packages that cannot be imported were already reported by the inspector
/// and are skipped here.
pub fn check_packages<P: ModuleProbe + ?Sized>(
    probe: &P,
    requirements: &RequirementSet,
    reporter: &mut Reporter<'_>,
) -> Result<Vec<PackageCheck>, AppError> {
    let names = requirements.names();
    let versions = get_packages(probe, &names, reporter)?;

    let mut checks = Vec::new();
    for (requirement, resolution) in requirements.iter().zip(versions) {
        let Resolution::Found(actual) = resolution else {
            continue;
        };
        let check = evaluate_package(requirement, &actual);
        reporter.package(&check)?;
        checks.push(check);
    }
    Ok(checks)
}
