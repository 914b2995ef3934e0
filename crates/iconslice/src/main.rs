//! iconslice binary entrypoint.

mod args;

use std::process::ExitCode;

use clap::Parser;
use iconslice_core::extract;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "extraction failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Logs to stderr. `RUST_LOG` overrides the level from the flags.
fn init_logging(level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> iconslice_core::Result<()> {
    let report = extract(
        &args.source,
        &args.dest,
        args.patterns.iter().cloned(),
        &args.repackage_options(),
    )?;

    for diagnostic in &report.diagnostics {
        tracing::warn!("{diagnostic}");
    }
    if report.copied.is_empty() && report.skipped.is_empty() {
        tracing::warn!(patterns = ?args.patterns, "no icons matched");
    }
    tracing::info!(
        icons = report.copied.len(),
        skipped = report.skipped.len(),
        directories = report.groups.len(),
        manifest = %report.manifest_path.display(),
        "done"
    );
    Ok(())
}
