// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

mod common;

use clap::Parser;
use common::VarRestore;
use envlock::cli::{Cli, Command};
use envlock::config::OutputFormat;
use std::path::PathBuf;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["envlock", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["envlock", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// Inspection Commands
// =============================================================================

#[test]
fn cli_list_defaults() {
    let cli = Cli::try_parse_from(["envlock", "list"]).unwrap();
    match cli.command {
        Some(Command::List(args)) => {
            assert!(!args.names);
            assert!(!args.no_redact);
        }
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn cli_list_names_only() {
    let cli = Cli::try_parse_from(["envlock", "list", "--names"]).unwrap();
    match cli.command {
        Some(Command::List(args)) => assert!(args.names),
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn cli_get_with_name() {
    let cli = Cli::try_parse_from(["envlock", "get", "PATH"]).unwrap();
    match cli.command {
        Some(Command::Get(args)) => assert_eq!(args.name, "PATH"),
        other => panic!("expected get, got {other:?}"),
    }
}

#[test]
fn cli_get_without_name_rejected() {
    assert!(Cli::try_parse_from(["envlock", "get"]).is_err());
}

#[test]
fn cli_path_command() {
    let cli = Cli::try_parse_from(["envlock", "path"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Path)));
}

#[test]
fn cli_cwd_command() {
    let cli = Cli::try_parse_from(["envlock", "cwd"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Cwd)));
}

#[test]
fn cli_options_command() {
    let cli = Cli::try_parse_from(["envlock", "options"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_combined_with_command() {
    let cli = Cli::try_parse_from([
        "envlock",
        "--no-default-config",
        "-c",
        "ci.toml",
        "-l",
        "0",
        "-f",
        "json",
        "list",
        "--names",
    ])
    .unwrap();

    assert!(cli.global.no_default_config);
    assert_eq!(cli.global.configs, vec![PathBuf::from("ci.toml")]);
    assert_eq!(cli.global.log_level, Some(0));
    assert_eq!(cli.global.format, Some(OutputFormat::Json));
    assert!(matches!(cli.command, Some(Command::List(_))));
}

#[test]
fn cli_set_options_accumulate() {
    let cli = Cli::try_parse_from([
        "envlock",
        "-s",
        "output/format=json",
        "-s",
        "output/redact=false",
        "options",
    ])
    .unwrap();

    assert_eq!(
        cli.global.options,
        vec!["output/format=json", "output/redact=false"]
    );
}

#[test]
fn cli_flag_overrides_follow_set_options() {
    let cli = Cli::try_parse_from(["envlock", "-s", "output/format=json", "-f", "plain", "list"])
        .unwrap();

    let overrides = cli.global.to_config_overrides();
    let set_pos = overrides
        .iter()
        .position(|o| o == "output/format=json")
        .unwrap();
    let flag_pos = overrides
        .iter()
        .position(|o| o == "output/format=plain")
        .unwrap();
    assert!(
        set_pos < flag_pos,
        "flag-derived overrides must come later so they win"
    );
}

#[test]
fn cli_format_env_fallback() {
    let _restore = VarRestore::set("ENVLOCK_OUTPUT_FORMAT", "json");

    let cli = Cli::try_parse_from(["envlock", "list"]).unwrap();
    assert_eq!(cli.global.format, Some(OutputFormat::Json));

    // An explicit flag still wins over the variable.
    let cli = Cli::try_parse_from(["envlock", "-f", "plain", "list"]).unwrap();
    assert_eq!(cli.global.format, Some(OutputFormat::Plain));
}

#[test]
fn cli_rejects_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["envlock", "--log-level", "9", "list"]).is_err());
}
