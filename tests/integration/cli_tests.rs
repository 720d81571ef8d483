//! CLI integration tests.
//!
//! Tests for argument parsing and configuration building.

use clap::Parser;
use menu_guard::cli::args::Args;
use menu_guard::DriverConfig;

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("menu-guard").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_default_args_give_default_config() {
    let args = parse(&[]);
    assert_eq!(DriverConfig::from_args(&args), DriverConfig::default());
}

#[test]
fn test_values_override() {
    let config = DriverConfig::from_args(&parse(&["--values", "10,20"]));
    assert_eq!(config.values, vec![10, 20]);
    assert_eq!(config.options, vec![1, 2, 3, 4]);
}

#[test]
fn test_empty_values_override() {
    let config = DriverConfig::from_args(&parse(&["--values"]));
    assert!(config.values.is_empty());
}

#[test]
fn test_options_override() {
    let config = DriverConfig::from_args(&parse(&["-o", "3", "-o", "0"]));
    assert_eq!(config.options, vec![3, 0]);
    assert_eq!(config.values.len(), 11);
}

#[test]
fn test_build_info_flag() {
    assert!(parse(&["--build-info"]).build_info);
}

#[test]
fn test_help_is_reported_as_error_kind() {
    let err = Args::try_parse_from(["menu-guard", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
