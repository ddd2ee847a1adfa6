// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Thread-safe access to process environment variables.
//!
//! ```text
//!        free accessors                    compound operations
//!  var / set_var / vars / ...            let mut g = env::lock();
//!        |                               g.set_var(..); g.set_var(..);
//!        v                                       |
//!     lock() -> EnvGuard  <----------------------+
//!        |
//!        v
//!   native environment block (getenv / setenv / environ)
//! ```
//!
//! Every free function acquires the guard for exactly the duration of the
//! native call and releases it on every exit path, including panics. Results
//! handed back are owned copies; nothing borrowed from the native block
//! outlives the lock.
//!
//! Two deliberate distinctions run through the API:
//!
//! * **Absence is not failure.** An unbound name reads as `None`, never as
//!   an error.
//! * **Bound-but-binary is failure, not absence.** A value that exists but
//!   is not valid unicode reports [`EnvError::NotUnicode`] from the `String`
//!   accessors; the `*_os` accessors read it losslessly.

pub mod guard;
pub mod path;


pub use guard::{EnvGuard, lock};
pub use path::{PATH_LIST_SEPARATOR, SEARCH_PATH_VAR, current_dir, path_dirs, split_search_path};

use std::ffi::{OsStr, OsString};

use crate::error::{EnvError, EnvResult};

/// Reads the variable `name`.
///
/// `Ok(None)` when the name is unbound. An empty value is a real binding and
/// reads as `Ok(Some(String::new()))`.
///
/// # Errors
///
/// [`EnvError::NotUnicode`] when the value exists but is not valid unicode.
/// Use [`var_os`] to read such a value losslessly.
pub fn var(name: impl AsRef<OsStr>) -> EnvResult<Option<String>> {
    let name = name.as_ref();
    match lock().var_os(name) {
        Some(value) => match value.into_string() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(EnvError::not_unicode(name)),
        },
        None => Ok(None),
    }
}

/// Reads the variable `name` without unicode conversion.
///
/// `None` when the name is unbound.
#[must_use]
pub fn var_os(name: impl AsRef<OsStr>) -> Option<OsString> {
    lock().var_os(name)
}

/// Binds `name` to `value`, creating the variable if absent and replacing
/// its value if present. The write is atomic with respect to every other
/// accessor in this crate.
///
/// # Panics
///
/// Panics if `name` is empty or contains `=` or NUL, or if `value` contains
/// NUL, mirroring `std::env`.
pub fn set_var(name: impl AsRef<OsStr>, value: impl AsRef<OsStr>) {
    lock().set_var(name, value);
}

/// Removes `name` from the environment. Removing an unbound name is a
/// no-op.
pub fn remove_var(name: impl AsRef<OsStr>) {
    lock().remove_var(name);
}

/// Copies the entire environment into a snapshot of `(name, value)` pairs.
///
/// Pair order is the native enumeration order of the environment block and
/// is implementation-defined; it is preserved, not sorted. The snapshot is a
/// copy taken under one lock acquisition: it is internally consistent and
/// unaffected by later mutation from any thread. An environment with no
/// variables yields an empty vector.
///
/// # Errors
///
/// [`EnvError::NotUnicode`] when any name or value is not valid unicode.
/// Use [`vars_os`] for a lossless snapshot.
pub fn vars() -> EnvResult<Vec<(String, String)>> {
    lock()
        .vars_os()
        .into_iter()
        .map(|(name, value)| {
            let name = name
                .into_string()
                .map_err(|raw| EnvError::not_unicode(&raw))?;
            let value = value
                .into_string()
                .map_err(|_| EnvError::not_unicode(&name))?;
            Ok((name, value))
        })
        .collect()
}

/// Copies the entire environment without unicode conversion.
///
/// Same ordering and snapshot semantics as [`vars`].
#[must_use]
pub fn vars_os() -> Vec<(OsString, OsString)> {
    lock().vars_os()
}
