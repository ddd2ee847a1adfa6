// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envlock.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envlock.toml (cwd, unless --no-default-config)
//! 3. --config files, in order
//! 4. ENVLOCK_* env vars
//! 5. CLI overrides (--set, plus dedicated flags)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVLOCK_OUTPUT_FORMAT=json  → output.format = "json"
//! ENVLOCK_OUTPUT_REDACT=false → output.redact = false
//! ```
//!
//! `ENVLOCK_OUTPUT_FORMAT` doubles as the fallback the `--format` flag
//! reads, so when set it ranks as that flag rather than as an environment
//! source.
//!
//! Multi-word keys such as `output_log_level` cannot be addressed through
//! the env source (the `_` separator is ambiguous); use a file or `--set`
//! for those. An `ENVLOCK_*` variable that maps to no known key is rejected
//! at load time, exactly like an unknown key in a file.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

pub use loader::ConfigLoader;
pub use types::{GlobalConfig, OutputConfig, OutputFormat};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Output options.
    pub output: OutputConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envlock::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("envlock.toml")
    ///     .with_env_prefix("ENVLOCK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options, deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_output_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_output_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("output.format".into(), self.output.format.to_string());
        options.insert("output.redact".into(), self.output.redact.to_string());
    }
}
