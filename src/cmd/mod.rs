// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   list, get, path, cwd, options
//! ```

pub mod config;
pub mod inspect;
pub mod path;

#[cfg(test)]
mod tests;
