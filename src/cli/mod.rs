// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envlock using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envlock [global options] <command>
//! list [--names] [--no-redact]
//! get NAME
//! path
//! cwd
//! options
//! version
//! ```

pub mod global;
pub mod inspect;


use crate::cli::global::GlobalOptions;
use crate::cli::inspect::{GetArgs, ListArgs};
use clap::{Parser, Subcommand};

/// Thread-safe process environment inspector.
#[derive(Debug, Parser)]
#[command(
    name = "envlock",
    author,
    version,
    about = "Thread-safe process environment inspector",
    long_about = "envlock Copyright (C) 2026 envlock contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Inspects process environment variables, the search path, and\n\
                  the working directory. Every read and write goes through one\n\
                  process-wide lock, so concurrent access never observes torn\n\
                  values. See `envlock <command> --help` for more information\n\
                  about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, envlock loads `envlock.toml` from the current\n\
                  directory if present. Additional files can be specified with\n\
                  --config; those are loaded afterwards and override it, later\n\
                  files overriding earlier ones. ENVLOCK_* environment\n\
                  variables and --set/flags override the files. Use\n\
                  --no-default-config to skip the automatic `envlock.toml`.\n\n\
                  EXIT CODES:\n\n\
                  0 success, 1 `get` on an unbound variable, 2 failure."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the configuration.
    Options,

    /// Lists all environment variables, in native order.
    List(ListArgs),

    /// Reads a single environment variable.
    ///
    /// Prints the value on stdout. When the variable is unbound, prints
    /// nothing and exits with code 1; errors exit with code 2.
    Get(GetArgs),

    /// Prints the entries of the search path, in order.
    Path,

    /// Prints the current working directory.
    Cwd,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
