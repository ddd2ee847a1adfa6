// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The process-wide environment guard.
//!
//! ```text
//! ENV_MUTEX: static Mutex<()>        (lives for the whole process)
//!       |
//!    lock() ---> EnvGuard (RAII, released on drop)
//!       |
//!  raw operations as guard methods:
//!    var_os / set_var / remove_var / vars_os / current_dir
//!  (the only code that touches native environment state)
//! ```
//!
//! `getenv`/`setenv` (and their platform equivalents) are not safe to call
//! concurrently, which is why `std::env::set_var` is an `unsafe fn` on
//! edition 2024. Every native call in this crate goes through [`EnvGuard`],
//! so accesses made via this crate are mutually exclusive. The guard cannot
//! serialize a foreign library calling `setenv` behind its back; keeping all
//! environment access on this crate is the caller's part of the contract.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Scoped proof of exclusive access to the process environment.
///
/// While an `EnvGuard` is alive no other thread can enter any accessor in
/// this crate. Mutations go through `&mut self` methods, so a shared
/// snapshot-in-progress can never observe its own guard writing.
#[must_use = "the environment is only protected while the guard is alive"]
pub struct EnvGuard {
    _guard: MutexGuard<'static, ()>,
}

/// Acquires the process-wide environment guard, blocking until available.
///
/// Acquisition itself cannot fail. A mutex poisoned by a panicking holder is
/// recovered with [`PoisonError::into_inner`]: the mutex protects no data of
/// its own, so there is no state a panic could have left half-updated.
///
/// The guard is not reentrant. Calling any free function of [`crate::env`]
/// (or `lock` again) on a thread that already holds an `EnvGuard` deadlocks;
/// use the guard's own methods for compound operations.
///
/// # Example
///
/// ```no_run
/// // Two writes no concurrent reader can observe half-applied.
/// let mut guard = envlock::env::lock();
/// guard.set_var("APP_MODE", "batch");
/// guard.set_var("APP_JOBS", "4");
/// drop(guard);
/// ```
pub fn lock() -> EnvGuard {
    EnvGuard {
        _guard: ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner),
    }
}

impl EnvGuard {
    /// Reads a variable without unicode conversion.
    ///
    /// `None` when the name is unbound. Names containing `=` or NUL simply
    /// read as unbound.
    #[must_use]
    pub fn var_os(&self, name: impl AsRef<OsStr>) -> Option<OsString> {
        std::env::var_os(name)
    }

    /// Binds `name` to `value`, creating the variable if absent and
    /// replacing its value if present.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or contains `=` or NUL, or if `value`
    /// contains NUL. These are the checks `std::env` itself performs; the
    /// poisoned mutex left behind is recovered on the next [`lock`].
    pub fn set_var(&mut self, name: impl AsRef<OsStr>, value: impl AsRef<OsStr>) {
        // SAFETY: the underlying OS primitive is unsynchronized; holding
        // ENV_MUTEX (witnessed by &mut self) serializes this call against
        // every other environment access in the crate.
        unsafe { std::env::set_var(name, value) };
    }

    /// Removes `name` from the environment. Removing an unbound name is a
    /// no-op, not an error.
    pub fn remove_var(&mut self, name: impl AsRef<OsStr>) {
        // SAFETY: as for set_var, serialized by ENV_MUTEX.
        unsafe { std::env::remove_var(name) };
    }

    /// Copies the entire environment block in native enumeration order.
    ///
    /// The lock is held across the whole traversal, so the copy is a
    /// consistent point-in-time snapshot even with concurrent writers.
    #[must_use]
    pub fn vars_os(&self) -> Vec<(OsString, OsString)> {
        std::env::vars_os().collect()
    }

    /// Queries the process working directory.
    ///
    /// # Errors
    ///
    /// Propagates the OS error when the directory cannot be determined, e.g.
    /// when it was deleted while the process held it open.
    pub fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}
