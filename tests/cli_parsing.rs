//! Tests for CLI subcommand parsing.

use clap::error::ErrorKind;
use clap::Parser;
use recon::config::{CnameConfig, HeadersConfig, DEFAULT_USER_AGENT};
use recon::{Cli, Command, CrtQuery, LogFormat, LogLevel};
use std::path::PathBuf;

#[test]
fn test_cname_defaults() {
    let cli = Cli::try_parse_from(["recon", "cname", "-l", "domains.txt"]).unwrap();
    assert!(matches!(cli.log_level, LogLevel::Info));
    assert!(matches!(cli.log_format, LogFormat::Plain));

    let Command::Cname(opt) = cli.command else {
        panic!("expected cname subcommand");
    };
    let config = CnameConfig::from(opt);
    assert_eq!(config.list, PathBuf::from("domains.txt"));
    assert_eq!(config.depth, 5);
    assert_eq!(config.concurrency, 10);
    assert_eq!(config.dns_timeout_seconds, 3);
    assert!(config.output.is_none());
    assert!(config.csv.is_none());
    assert!(config.resolvers.is_none());
}

#[test]
fn test_cname_all_options() {
    let cli = Cli::try_parse_from([
        "recon",
        "cname",
        "--list",
        "in.txt",
        "-o",
        "out.json",
        "--csv",
        "out.csv",
        "--resolvers",
        "resolvers.txt",
        "-d",
        "2",
        "--concurrency",
        "1",
        "--timeout-seconds",
        "8",
    ])
    .unwrap();

    let Command::Cname(opt) = cli.command else {
        panic!("expected cname subcommand");
    };
    assert_eq!(opt.output, Some(PathBuf::from("out.json")));
    assert_eq!(opt.csv, Some(PathBuf::from("out.csv")));
    assert_eq!(opt.resolvers, Some(PathBuf::from("resolvers.txt")));
    assert_eq!(opt.depth, 2);
    assert_eq!(opt.concurrency, 1);
    assert_eq!(opt.timeout_seconds, 8);
}

#[test]
fn test_cname_without_arguments_shows_help() {
    let error = Cli::try_parse_from(["recon", "cname"]).unwrap_err();
    assert_eq!(
        error.kind(),
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    assert_ne!(error.exit_code(), 0);
}

#[test]
fn test_cname_missing_list_is_rejected() {
    let error = Cli::try_parse_from(["recon", "cname", "-o", "out.json"]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn test_cname_depth_must_be_a_number() {
    let error = Cli::try_parse_from(["recon", "cname", "-l", "d.txt", "-d", "deep"]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ValueValidation);
}

#[test]
fn test_global_logging_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "recon",
        "headers",
        "-l",
        "hosts.txt",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .unwrap();
    assert!(matches!(cli.log_level, LogLevel::Debug));
    assert!(matches!(cli.log_format, LogFormat::Json));
}

#[test]
fn test_headers_defaults() {
    let cli = Cli::try_parse_from(["recon", "headers", "-l", "hosts.txt"]).unwrap();
    let Command::Headers(opt) = cli.command else {
        panic!("expected headers subcommand");
    };
    let config = HeadersConfig::from(opt);
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
}

#[test]
fn test_massdns_positional_input() {
    let cli = Cli::try_parse_from(["recon", "massdns", "massdns.out", "-o", "parsed.json"]).unwrap();
    let Command::Massdns(opt) = cli.command else {
        panic!("expected massdns subcommand");
    };
    assert_eq!(opt.input_file, PathBuf::from("massdns.out"));
    assert_eq!(opt.output, Some(PathBuf::from("parsed.json")));
}

#[test]
fn test_crt_domain_query() {
    let cli = Cli::try_parse_from(["recon", "crt", "-d", "example.com"]).unwrap();
    let Command::Crt(opt) = cli.command else {
        panic!("expected crt subcommand");
    };
    assert_eq!(
        CrtQuery::from_opt(&opt),
        Some(CrtQuery::Domain("example.com".to_string()))
    );
}

#[test]
fn test_crt_org_query_with_spaces() {
    let cli = Cli::try_parse_from(["recon", "crt", "--org", "Acme Corp"]).unwrap();
    let Command::Crt(opt) = cli.command else {
        panic!("expected crt subcommand");
    };
    assert_eq!(
        CrtQuery::from_opt(&opt),
        Some(CrtQuery::Org("Acme Corp".to_string()))
    );
}

#[test]
fn test_crt_rejects_both_queries() {
    let error =
        Cli::try_parse_from(["recon", "crt", "-d", "example.com", "--org", "Acme"]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn test_crt_requires_a_query() {
    let error = Cli::try_parse_from(["recon", "crt", "-o", "out.txt"]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["recon"]).is_err());
}
