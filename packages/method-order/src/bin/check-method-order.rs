//! Pre-commit entry point.
//!
//! # Usage
//!
//! ```bash
//! check-method-order models/foo.py models/bar.py
//!
//! # report violations but keep the commit going
//! check-method-order --exit-zero models/foo.py
//!
//! # structured output
//! check-method-order --json models/foo.py
//! ```

use clap::Parser;
use method_order::{CheckService, Reporter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "check-method-order")]
#[command(about = "Check that Odoo model members follow the canonical category order")]
struct Cli {
    /// Always return exit code 0, even when violations are found.
    #[arg(long)]
    exit_zero: bool,

    /// Emit diagnostics as JSON instead of text lines.
    #[arg(long)]
    json: bool,

    /// Python files to check.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let service = CheckService::new();
    let mut reporter = Reporter::new();
    reporter.extend(service.check_files(&cli.files)?);

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        reporter.write_json(&mut stdout)?;
    } else {
        reporter.write_text(&mut stdout)?;
    }

    if reporter.success() || cli.exit_zero {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
