//! Text output formatter for human-readable display
//!
//! Lines are written as soon as each result is known:
//! - `[OK] Your Python version is 3.11.4`
//! - `[FAIL]: foo is not installed and/or cannot be imported.`
//! - `[OK] numpy 1.25.0`
//! - `[FAIL] numpy 1.24.3, please upgrade to >= 2.0.0`

use crate::domain::{InterpreterCheck, PackageCheck, PackageStatus};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter without colors
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: false,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn ok_tag(&self) -> String {
        if self.color {
            "[OK]".green().bold().to_string()
        } else {
            "[OK]".to_string()
        }
    }

    fn fail_tag(&self) -> String {
        if self.color {
            "[FAIL]".red().bold().to_string()
        } else {
            "[FAIL]".to_string()
        }
    }

    fn show_ok(&self) -> bool {
        self.verbosity != Verbosity::Quiet
    }
}

impl OutputFormatter for TextFormatter {
    fn interpreter(
        &mut self,
        check: &InterpreterCheck,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if check.is_ok() {
            if self.show_ok() {
                writeln!(
                    writer,
                    "{} Your Python version is {}",
                    self.ok_tag(),
                    check.version
                )?;
            }
        } else {
            writeln!(
                writer,
                "{} We recommend Python {} or newer but found version {}",
                self.fail_tag(),
                check.minimum,
                check.full_version
            )?;
        }
        Ok(())
    }

    fn import_failure(&mut self, name: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}: {} is not installed and/or cannot be imported.",
            self.fail_tag(),
            name
        )
    }

    fn package(&mut self, check: &PackageCheck, writer: &mut dyn Write) -> std::io::Result<()> {
        match &check.status {
            PackageStatus::Ok(actual) => {
                if self.show_ok() {
                    writeln!(writer, "{} {} {}", self.ok_tag(), check.name, actual)?;
                }
            }
            PackageStatus::Outdated(actual) => {
                writeln!(
                    writer,
                    "{} {} {}, please upgrade to >= {}",
                    self.fail_tag(),
                    check.name,
                    actual,
                    check.minimum
                )?;
            }
            PackageStatus::Unrecognized(raw) => {
                writeln!(
                    writer,
                    "{} {} {}, unrecognized version (requires >= {})",
                    self.fail_tag(),
                    check.name,
                    raw,
                    check.minimum
                )?;
            }
        }
        Ok(())
    }

    fn finish(&mut self, _writer: &mut dyn Write) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn interpreter_check(version: &str) -> InterpreterCheck {
        InterpreterCheck {
            version: v(version),
            full_version: format!("{} (main, Jun  6 2023) [GCC 11.2.0]", version),
            minimum: v("3.8"),
        }
    }

    fn package_check(name: &str, minimum: &str, status: PackageStatus) -> PackageCheck {
        PackageCheck {
            name: name.to_string(),
            minimum: v(minimum),
            status,
        }
    }

    fn render(
        formatter: &mut TextFormatter,
        f: impl FnOnce(&mut TextFormatter, &mut Vec<u8>) -> std::io::Result<()>,
    ) -> String {
        let mut buf = Vec::new();
        f(formatter, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_interpreter_ok() {
        let mut formatter = TextFormatter::new(Verbosity::Normal);
        let out = render(&mut formatter, |f, w| {
            f.interpreter(&interpreter_check("3.11.4"), w)
        });
        assert_eq!(out, "[OK] Your Python version is 3.11.4\n");
    }

    #[test]
    fn test_interpreter_fail_includes_full_version() {
        let mut formatter = TextFormatter::new(Verbosity::Normal);
        let out = render(&mut formatter, |f, w| {
            f.interpreter(&interpreter_check("3.7.17"), w)
        });
        assert_eq!(
            out,
            "[FAIL] We recommend Python 3.8 or newer but found version 3.7.17 (main, Jun  6 2023) [GCC 11.2.0]\n"
        );
    }

    #[test]
    fn test_import_failure_line() {
        let mut formatter = TextFormatter::new(Verbosity::Normal);
        let out = render(&mut formatter, |f, w| f.import_failure("foo", w));
        assert_eq!(
            out,
            "[FAIL]: foo is not installed and/or cannot be imported.\n"
        );
    }

    #[test]
    fn test_package_ok_line() {
        let mut formatter = TextFormatter::new(Verbosity::Normal);
        let check = package_check("numpy", "1.24.3", PackageStatus::Ok(v("1.25.0")));
        let out = render(&mut formatter, |f, w| f.package(&check, w));
        assert_eq!(out, "[OK] numpy 1.25.0\n");
    }

    #[test]
    fn test_package_outdated_line() {
        let mut formatter = TextFormatter::new(Verbosity::Normal);
        let check = package_check("numpy", "2.0.0", PackageStatus::Outdated(v("1.24.3")));
        let out = render(&mut formatter, |f, w| f.package(&check, w));
        assert_eq!(out, "[FAIL] numpy 1.24.3, please upgrade to >= 2.0.0\n");
    }

    #[test]
    fn test_package_unrecognized_line() {
        let mut formatter = TextFormatter::new(Verbosity::Normal);
        let check = package_check(
            "oddpkg",
            "1.0",
            PackageStatus::Unrecognized("unknown".into()),
        );
        let out = render(&mut formatter, |f, w| f.package(&check, w));
        assert_eq!(
            out,
            "[FAIL] oddpkg unknown, unrecognized version (requires >= 1.0)\n"
        );
    }

    #[test]
    fn test_quiet_hides_ok_lines() {
        let mut formatter = TextFormatter::new(Verbosity::Quiet);
        let ok = package_check("numpy", "1.24.3", PackageStatus::Ok(v("1.25.0")));
        let bad = package_check("scipy", "1.10.1", PackageStatus::Outdated(v("1.9.0")));
        let out = render(&mut formatter, |f, w| {
            f.interpreter(&interpreter_check("3.11.4"), w)?;
            f.package(&ok, w)?;
            f.package(&bad, w)
        });
        assert_eq!(out, "[FAIL] scipy 1.9.0, please upgrade to >= 1.10.1\n");
    }

    #[test]
    fn test_colored_tags_keep_text() {
        colored::control::set_override(true);
        let mut formatter = TextFormatter::with_color(Verbosity::Normal, true);
        let check = package_check("numpy", "1.24.3", PackageStatus::Ok(v("1.25.0")));
        let out = render(&mut formatter, |f, w| f.package(&check, w));
        assert!(out.contains("[OK]"));
        assert!(out.contains("numpy 1.25.0"));
        assert!(out.contains("\u{1b}["));
    }
}
