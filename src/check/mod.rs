//! Environment checks
//!
//! - `version_gate`: interpreter version against a minimum
//! - `inspector`: import packages and read their versions
//! - `package_gate`: package versions against a requirement set

pub mod inspector;
pub mod package_gate;
pub mod version_gate;

pub use inspector::{get_packages, resolve_package};
pub use package_gate::{check_packages, evaluate_package};
pub use version_gate::{check_interpreter, evaluate_interpreter};
