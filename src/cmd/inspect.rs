// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable-inspection commands: `list` and `get`.

use std::ffi::OsString;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::cli::inspect::{GetArgs, ListArgs};
use crate::config::{Config, OutputFormat};
use crate::env;
use crate::error::Result;

/// Replacement text for values of credential-looking variables.
pub(crate) const REDACTED_MARKER: &str = "[hidden]";

fn sensitive_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(TOKEN|SECRET|PASSW(OR)?D|(API|ACCESS|PRIVATE)[_-]?KEY|CREDENTIAL)")
            .expect("static pattern compiles")
    })
}

/// Whether a variable name looks like it holds a credential.
pub(crate) fn is_sensitive(name: &str) -> bool {
    sensitive_name_pattern().is_match(name)
}

fn display_value<'a>(name: &str, value: &'a str, redact: bool) -> &'a str {
    if redact && is_sensitive(name) {
        REDACTED_MARKER
    } else {
        value
    }
}

/// Renders an environment snapshot as output lines, preserving entry order.
pub(crate) fn render_environment(
    entries: &[(OsString, OsString)],
    format: OutputFormat,
    names_only: bool,
    redact: bool,
) -> Result<Vec<String>> {
    match format {
        OutputFormat::Plain => Ok(entries
            .iter()
            .map(|(name, value)| {
                let name = name.to_string_lossy();
                if names_only {
                    name.into_owned()
                } else {
                    let value = value.to_string_lossy();
                    format!("{name}={}", display_value(&name, &value, redact))
                }
            })
            .collect()),
        OutputFormat::Json => {
            let json = if names_only {
                let names: Vec<_> = entries
                    .iter()
                    .map(|(name, _)| name.to_string_lossy())
                    .collect();
                serde_json::to_string_pretty(&names)?
            } else {
                let objects: Vec<_> = entries
                    .iter()
                    .map(|(name, value)| {
                        let name = name.to_string_lossy();
                        let value = value.to_string_lossy();
                        serde_json::json!({
                            "name": name,
                            "value": display_value(&name, &value, redact),
                        })
                    })
                    .collect();
                serde_json::to_string_pretty(&objects)?
            };
            Ok(vec![json])
        }
    }
}

/// Renders a single variable for `get`.
pub(crate) fn render_variable(name: &str, value: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(value.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "name": name,
            "value": value,
        }))?),
    }
}

/// Main handler for the `list` command.
///
/// # Errors
///
/// Returns an error if the output cannot be rendered.
pub fn run_list_command(args: &ListArgs, config: &Config) -> Result<()> {
    let entries = env::vars_os();
    debug!(count = entries.len(), "took environment snapshot");

    let redact = config.output.redact && !args.no_redact;
    for line in render_environment(&entries, config.output.format, args.names, redact)? {
        println!("{line}");
    }
    Ok(())
}

/// Main handler for the `get` command.
///
/// Returns `Ok(false)` when the variable is unbound, printing nothing; the
/// caller turns that into exit code 1. Values are printed as queried, with
/// no redaction.
///
/// # Errors
///
/// Returns an error if the output cannot be rendered.
pub fn run_get_command(args: &GetArgs, config: &Config) -> Result<bool> {
    match env::var_os(&args.name) {
        Some(value) => {
            let value = value.to_string_lossy();
            println!("{}", render_variable(&args.name, &value, config.output.format)?);
            Ok(true)
        }
        None => {
            debug!(name = %args.name, "variable is unbound");
            Ok(false)
        }
    }
}
