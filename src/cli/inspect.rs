// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the variable-inspection commands.

use clap::Args;

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Prints variable names only, without values.
    #[arg(long)]
    pub names: bool,

    /// Prints credential-looking values instead of hiding them.
    #[arg(long = "no-redact")]
    pub no_redact: bool,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Name of the variable to read.
    #[arg(value_name = "NAME")]
    pub name: String,
}
