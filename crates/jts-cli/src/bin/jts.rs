#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use jts_cli::args::CliArgs;
use jts_cli::driver::{self, RunOptions};
use jts_cli::reporter::Reporter;
use jts_cli::{config, tracing_config};

const EXIT_UNITS_FAILED: i32 = 1;

fn main() -> Result<()> {
    // Only active when JTS_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let config = config::load_config(&args.config)?;
    let options = RunOptions {
        jobs: args.jobs,
        dry_run: args.dry_run,
    };
    let summary = driver::run(&config, &options)
        .with_context(|| format!("run of {} aborted", args.config.display()))?;

    let diagnostics_color = args
        .pretty
        .unwrap_or_else(|| std::io::stderr().is_terminal());
    let diagnostics = Reporter::new(diagnostics_color).render_diagnostics(&summary);
    if !diagnostics.is_empty() {
        // render_diagnostics already ends every line.
        eprint!("{diagnostics}");
    }

    let summary_color = args
        .pretty
        .unwrap_or_else(|| std::io::stdout().is_terminal());
    println!("{}", Reporter::new(summary_color).render_summary(&summary));

    if !summary.is_success() {
        std::process::exit(EXIT_UNITS_FAILED);
    }
    Ok(())
}
