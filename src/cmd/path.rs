// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Search-path and working-directory commands: `path` and `cwd`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{Config, OutputFormat};
use crate::env;
use crate::error::Result;

/// Renders search-path entries as output lines, one per entry in plain mode.
///
/// An empty entry renders as an empty line; an empty list renders nothing.
/// JSON output keeps the two apart as `[""]` versus `[]`.
pub(crate) fn render_search_path(dirs: &[PathBuf], format: OutputFormat) -> Result<Vec<String>> {
    match format {
        OutputFormat::Plain => Ok(dirs.iter().map(|dir| dir.display().to_string()).collect()),
        OutputFormat::Json => {
            let entries: Vec<_> = dirs.iter().map(|dir| dir.to_string_lossy()).collect();
            Ok(vec![serde_json::to_string_pretty(&entries)?])
        }
    }
}

/// Renders the working directory for `cwd`.
pub(crate) fn render_current_dir(dir: &Path, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(dir.display().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&dir.to_string_lossy())?),
    }
}

/// Main handler for the `path` command.
///
/// # Errors
///
/// Returns an error if the output cannot be rendered.
pub fn run_path_command(config: &Config) -> Result<()> {
    let dirs = env::path_dirs();
    debug!(entries = dirs.len(), "split search path");

    for line in render_search_path(&dirs, config.output.format)? {
        println!("{line}");
    }
    Ok(())
}

/// Main handler for the `cwd` command.
///
/// # Errors
///
/// Returns an error if the working directory cannot be determined.
pub fn run_cwd_command(config: &Config) -> Result<()> {
    let dir = env::current_dir()?;
    println!("{}", render_current_dir(&dir, config.output.format)?);
    Ok(())
}
