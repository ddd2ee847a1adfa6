// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::ffi::{OsStr, OsString};

use envlock::env;

/// Restores a variable to its pre-test binding on drop.
///
/// Captures the current state, applies the requested binding, and puts the
/// original back when dropped, so a test can mutate well-known names such as
/// the search path without leaking into other tests in the same process.
pub struct VarRestore {
    name: OsString,
    original: Option<OsString>,
}

impl VarRestore {
    /// Binds `name` to `value` for the lifetime of the returned guard.
    pub fn set(name: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        let name = name.as_ref().to_os_string();
        let original = env::var_os(&name);
        env::set_var(&name, value);
        Self { name, original }
    }

    /// Unbinds `name` for the lifetime of the returned guard.
    pub fn unset(name: impl AsRef<OsStr>) -> Self {
        let name = name.as_ref().to_os_string();
        let original = env::var_os(&name);
        env::remove_var(&name);
        Self { name, original }
    }
}

impl Drop for VarRestore {
    fn drop(&mut self) {
        match self.original.take() {
            Some(value) => env::set_var(&self.name, value),
            None => env::remove_var(&self.name),
        }
    }
}
