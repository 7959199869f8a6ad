//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_sniff_minimal() {
    match parse(&["aisniffer", "sniff", "-u", "http://10.10.10.10"]) {
        CliCommand::Sniff {
            url,
            outdir,
            max_words,
            keyword,
            size,
        } => {
            assert_eq!(url, "http://10.10.10.10");
            assert!(outdir.is_none());
            assert!(max_words.is_none());
            assert!(keyword.is_none());
            assert!(size.is_none());
        }
        _ => panic!("expected Sniff"),
    }
}

#[test]
fn cli_parse_sniff_all_flags() {
    match parse(&[
        "aisniffer",
        "sniff",
        "--url",
        "http://t",
        "--outdir",
        "/tmp/lists",
        "--max-words",
        "300",
        "--keyword",
        "admin panel",
    ]) {
        CliCommand::Sniff {
            outdir,
            max_words,
            keyword,
            ..
        } => {
            assert_eq!(outdir.as_deref(), Some(Path::new("/tmp/lists")));
            assert_eq!(max_words, Some(300));
            assert_eq!(keyword.as_deref(), Some("admin panel"));
        }
        _ => panic!("expected Sniff"),
    }
}

#[test]
fn cli_sniff_requires_url() {
    assert!(Cli::try_parse_from(["aisniffer", "sniff"]).is_err());
}

#[test]
fn cli_sniff_keyword_conflicts_with_size() {
    let res = Cli::try_parse_from(["aisniffer", "sniff", "-u", "x", "-k", "api", "--size", "100"]);
    assert!(res.is_err());
}

#[test]
fn cli_parse_generate() {
    match parse(&["aisniffer", "generate", "--size", "800", "--seed", "7", "-o", "out.txt"]) {
        CliCommand::Generate { size, seed, output } => {
            assert_eq!(size, Some(800));
            assert_eq!(seed, Some(7));
            assert_eq!(output.as_deref(), Some(Path::new("out.txt")));
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_negative_size_reaches_validation() {
    match parse(&["aisniffer", "generate", "--size", "-3"]) {
        CliCommand::Generate { size, .. } => assert_eq!(size, Some(-3)),
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_keyword() {
    match parse(&["aisniffer", "keyword", "billing", "--max-words", "50"]) {
        CliCommand::Keyword {
            keyword,
            max_words,
            output,
        } => {
            assert_eq!(keyword, "billing");
            assert_eq!(max_words, Some(50));
            assert!(output.is_none());
        }
        _ => panic!("expected Keyword"),
    }
}

#[test]
fn cli_parse_sanitize() {
    match parse(&["aisniffer", "sanitize", "candidates.txt"]) {
        CliCommand::Sanitize { path } => {
            assert_eq!(path.as_deref(), Some(Path::new("candidates.txt")))
        }
        _ => panic!("expected Sanitize"),
    }
    match parse(&["aisniffer", "sanitize"]) {
        CliCommand::Sanitize { path } => assert!(path.is_none()),
        _ => panic!("expected Sanitize"),
    }
}

#[test]
fn cli_parse_verbose_is_global() {
    let cli = Cli::try_parse_from(["aisniffer", "generate", "-vv"]).unwrap();
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_parse_completions() {
    match parse(&["aisniffer", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
