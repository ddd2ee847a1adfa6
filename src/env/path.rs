// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Search-path interpretation and working-directory retrieval.
//!
//! ```text
//! PATH = "/usr/local/bin:/usr/bin::/bin"
//!             |            |      |  |
//!             v            v      v  v
//!   [/usr/local/bin, /usr/bin,   "", /bin]
//!
//! Empty segments survive the split: several OS conventions read an empty
//! PATH entry as "the current directory", so dropping one would change
//! lookup behavior downstream.
//! ```

use std::ffi::OsStr;
use std::path::PathBuf;

use super::lock;
use crate::error::{EnvError, EnvResult};

/// Name of the search-path variable.
///
/// Windows resolves environment names case-insensitively, so `PATH` finds
/// the conventionally spelled `Path` there as well.
pub const SEARCH_PATH_VAR: &str = "PATH";

/// Separator between entries of the search-path list.
pub const PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Splits a raw search-path value into its entries, in order.
///
/// Pure string interpretation: no lock is taken and nothing is read from the
/// process. Entries are not resolved, canonicalized, or checked for
/// existence. On Windows, double-quoted entries containing `;` stay whole
/// instead of being split mid-entry, matching how the OS reads them.
#[must_use]
pub fn split_search_path(raw: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(raw).collect()
}

/// Reads the search path and returns its entries in order.
///
/// The raw value is read under the guard, so a concurrent writer can never
/// produce a torn hybrid of two values. An unset search-path variable yields
/// an empty vector, not an error.
#[must_use]
pub fn path_dirs() -> Vec<PathBuf> {
    match lock().var_os(SEARCH_PATH_VAR) {
        Some(raw) => split_search_path(&raw),
        None => Vec::new(),
    }
}

/// Retrieves the process working directory.
///
/// Taken under the same guard as variable access: on some platforms the
/// directory query and environment mutation share unsynchronized state, so
/// both are serialized through the one lock.
///
/// # Errors
///
/// [`EnvError::CurrentDir`] when the OS cannot determine the directory.
/// The failure is surfaced, never papered over with a default path.
pub fn current_dir() -> EnvResult<PathBuf> {
    lock().current_dir().map_err(EnvError::CurrentDir)
}
