// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← Enable file logging
//! --format FMT      ← Output format (plain, json)
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > ENVLOCK_* > --config > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::OutputFormat;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Output format for command results (plain, json).
    ///
    /// The env fallback is the same `ENVLOCK_OUTPUT_FORMAT` the config env
    /// source maps, so the advertised variable is always a loadable key.
    #[arg(short = 'f', long = "format", value_name = "FORMAT", env = "ENVLOCK_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Sets an option, such as 'output/redact=false'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables auto loading of `envlock.toml` from the current directory,
    /// only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// Dedicated flags are appended after `--set` options, so they win when
    /// both address the same key.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global/output_log_level={level}"));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global/file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global/log_file={}", path.display()));
        }

        if let Some(format) = self.format {
            overrides.push(format!("output/format={format}"));
        }

        overrides
    }
}
