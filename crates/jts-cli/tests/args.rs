use super::*;
use clap::Parser;
use std::path::Path;

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["jts"]).expect("default args should parse");

    assert_eq!(args.config, Path::new("jts.yaml"));
    assert_eq!(args.jobs, None);
    assert!(!args.dry_run);
    assert_eq!(args.pretty, None);
}

#[test]
fn parses_all_flags() {
    let args = CliArgs::try_parse_from([
        "jts",
        "--config",
        "configs/jts.json",
        "--jobs",
        "4",
        "--dry-run",
        "--pretty",
        "false",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.config, Path::new("configs/jts.json"));
    assert_eq!(args.jobs, Some(4));
    assert!(args.dry_run);
    assert_eq!(args.pretty, Some(false));
}

#[test]
fn parses_short_flags_and_alias() {
    let args = CliArgs::try_parse_from(["jts", "-c", "x.yml", "-j", "1", "--dryRun"])
        .expect("short args should parse");
    assert_eq!(args.config, Path::new("x.yml"));
    assert_eq!(args.jobs, Some(1));
    assert!(args.dry_run);
}

#[test]
fn rejects_non_numeric_jobs() {
    assert!(CliArgs::try_parse_from(["jts", "--jobs", "many"]).is_err());
}
