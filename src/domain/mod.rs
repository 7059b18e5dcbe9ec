//! Core domain models for envcheck
//!
//! This module contains the fundamental types used throughout the application:
//! - Version parsing and ordering
//! - Requirement sets mapping package names to minimum versions
//! - Inspection and check results

mod outcome;
mod requirement;
mod version;

pub use outcome::{
    InterpreterCheck, PackageCheck, PackageStatus, Resolution, NOT_AVAILABLE, UNKNOWN_VERSION,
};
pub use requirement::{Requirement, RequirementSet, DEFAULT_MIN_PYTHON, DEFAULT_REQUIREMENTS};
pub use version::{LocalSegment, PreReleaseKind, Version};
