use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the jts binary.
#[derive(Parser, Debug)]
#[command(
    name = "jts",
    version,
    about = "Transpile serialized Java syntax trees to TypeScript"
)]
pub struct CliArgs {
    /// Path to the configuration file (`.yaml`, `.yml` or `.json`).
    #[arg(short = 'c', long, default_value = "jts.yaml")]
    pub config: PathBuf,

    /// Number of worker threads; defaults to the number of CPUs.
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,

    /// Transpile everything but do not write any output file.
    #[arg(long = "dry-run", alias = "dryRun")]
    pub dry_run: bool,

    /// Colorize the summary. Defaults to on when stdout is a terminal.
    #[arg(long)]
    pub pretty: Option<bool>,
}

#[cfg(test)]
#[path = "../tests/args.rs"]
mod tests;
