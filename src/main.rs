//! envcheck - Python environment checker CLI tool
//!
//! Checks the Python interpreter version and the versions of the packages a
//! tutorial needs, printing one `[OK]`/`[FAIL]` line per item.

use clap::Parser;
use envcheck::cli::CliArgs;
use envcheck::config::CheckConfig;
use envcheck::orchestrator::Checker;
use envcheck::output::{create_formatter, OutputConfig, Reporter};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout only carries the report. `--verbose` sets
/// debug level; otherwise `RUST_LOG` applies, defaulting to warnings.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("envcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = CheckConfig::from_cli(&args)?;
    tracing::debug!(
        interpreter = %config.interpreter.display(),
        minimum = %config.min_python,
        packages = config.requirements.len(),
        "starting checks"
    );

    let stdout = io::stdout();
    let color = !args.no_color && std::env::var_os("NO_COLOR").is_none() && stdout.is_terminal();
    let output_config = OutputConfig::from_cli(args.json, args.quiet, color);

    let mut handle = stdout.lock();
    let mut reporter = Reporter::new(create_formatter(&output_config), &mut handle);
    let summary = Checker::new(config).run(&mut reporter)?;

    if args.strict && summary.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
