/*
 * lifecycle-lint CLI
 *
 * Usage:
 *   lifecycle-lint app/src
 *   lifecycle-lint --config lifecycle-lint.yaml --format json app/src lib/src
 *   lifecycle-lint --list-issues
 *
 * Exit code 1 when any diagnostic (or unreadable file) is reported.
 * Log level via RUST_LOG (default: warn).
 */

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lifecycle_lint::config::LintConfig;
use lifecycle_lint::pipeline::{lint_paths, render, render_issue_list, Linter, ReportFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lifecycle-lint",
    version,
    about = "Resource-lifecycle checks for Android components"
)]
struct Cli {
    /// Files or directories to lint
    #[arg(required_unless_present = "list_issues")]
    paths: Vec<PathBuf>,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Lint files one at a time
    #[arg(long)]
    sequential: bool,

    /// List the issues this tool reports and exit
    #[arg(long)]
    list_issues: bool,
}

#[cfg(feature = "parallel")]
fn init_pool(parallel: bool) {
    if parallel {
        lifecycle_lint::pipeline::init_thread_pool();
    }
}

#[cfg(not(feature = "parallel"))]
fn init_pool(_parallel: bool) {}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_issues {
        print!("{}", render_issue_list());
        return ExitCode::SUCCESS;
    }

    let config = match &cli.config {
        Some(path) => match LintConfig::from_yaml(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Config error ({}): {e}", path.display());
                return ExitCode::from(2);
            }
        },
        None => LintConfig::default(),
    };
    let config = if cli.sequential {
        config.with_parallel(false)
    } else {
        config
    };

    init_pool(config.parallel);
    let linter = Linter::new(config);
    let report = lint_paths(&cli.paths, &linter);

    match render(&report, cli.format) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("Failed to render report: {e}");
            return ExitCode::from(2);
        }
    }

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
