use clap::Parser;
use gender_tally::analyzer::DEFAULT_MODEL;
use gender_tally::cli::args::Cli;
use gender_tally::config::{AnalysisMode, OutputFormat};
use std::path::Path;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    let mut argv = vec!["gender-tally"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv)
}

#[test]
fn test_defaults() {
    let cli = parse(&[]).unwrap();

    assert!(cli.input.is_none());
    assert!(!cli.sample);
    assert_eq!(cli.mode, AnalysisMode::Simple);
    assert_eq!(cli.model, DEFAULT_MODEL);
    assert_eq!(cli.timeout, 30);
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(cli.male_aliases.is_empty());
    assert!(cli.female_aliases.is_empty());
    assert_eq!(cli.log_filter(), "warn");
}

#[test]
fn test_dash_reads_stdin() {
    let cli = parse(&["-"]).unwrap();
    assert!(cli.input_path().is_none());

    let cli = parse(&["roster.txt"]).unwrap();
    assert_eq!(cli.input_path(), Some(Path::new("roster.txt")));
}

#[test]
fn test_smart_mode_options() {
    let cli = parse(&["--mode", "smart", "-m", "claude-3-5-haiku", "-t", "60", "--api-key", "k"]).unwrap();

    assert_eq!(cli.mode, AnalysisMode::Smart);
    assert_eq!(cli.model, "claude-3-5-haiku");
    assert_eq!(cli.timeout, 60);
    assert_eq!(cli.api_key.as_deref(), Some("k"));
}

#[test]
fn test_repeatable_alias_flags() {
    let cli = parse(&[
        "--male-alias",
        "anh",
        "--male-alias",
        "ông",
        "--female-alias",
        "chị",
    ])
    .unwrap();

    assert_eq!(cli.male_aliases, vec!["anh", "ông"]);
    assert_eq!(cli.female_aliases, vec!["chị"]);
}

#[test]
fn test_timeout_bounds() {
    assert!(parse(&["--timeout", "4"]).is_err());
    assert!(parse(&["--timeout", "301"]).is_err());
    assert!(parse(&["--timeout", "soon"]).is_err());
    assert_eq!(parse(&["--timeout", "5"]).unwrap().timeout, 5);
    assert_eq!(parse(&["--timeout", "300"]).unwrap().timeout, 300);
}

#[test]
fn test_sample_conflicts_with_input() {
    assert!(parse(&["--sample", "roster.txt"]).is_err());
    assert!(parse(&["--sample"]).unwrap().sample);
}

#[test]
fn test_unknown_enum_values_rejected() {
    assert!(parse(&["--mode", "clever"]).is_err());
    assert!(parse(&["--format", "yaml"]).is_err());
}

#[test]
fn test_log_filter_levels() {
    assert_eq!(parse(&["-v"]).unwrap().log_filter(), "info");
    assert_eq!(parse(&["-d"]).unwrap().log_filter(), "debug");
    assert!(parse(&["-d"]).unwrap().is_verbose());
}
