//! envcheck - Python environment checker library
//!
//! This library checks that a Python interpreter and a set of packages
//! meet minimum version requirements:
//! - Interpreter version gate
//! - Package import and version inspection
//! - Package version gate against a requirement set

pub mod check;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod probe;
