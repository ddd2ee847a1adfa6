// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! EnvError (<= 24 bytes)
//!   NotUnicode { name }   value (or name) exists but is not UTF-8
//!   CurrentDir(io)        working directory could not be determined
//!
//! ConfigError
//!   InvalidValue          bad value for a known key
//!   InvalidOverride       malformed --set argument
//!
//! Absence of a variable is deliberately NOT an error: accessors return
//! Option so an unbound name can never be conflated with a failure.
//! ```

use std::ffi::OsStr;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Errors from environment accessors.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The variable is bound, but the value (or, during enumeration, a name)
    /// is not valid unicode. The lossless `*_os` accessors never report this.
    #[error("environment variable '{name}' contains non-unicode data")]
    NotUnicode { name: Box<str> },

    /// The OS could not determine the working directory, e.g. because it was
    /// deleted while the process held it open.
    #[error("failed to read current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

impl EnvError {
    /// Builds [`EnvError::NotUnicode`] for `name`, rendering the name itself
    /// lossily when the name is the part that is not unicode.
    pub(crate) fn not_unicode(name: impl AsRef<OsStr>) -> Self {
        Self::NotUnicode {
            name: name.as_ref().to_string_lossy().into(),
        }
    }
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `--set` override that is not of the form `section/key=value`.
    #[error("invalid override '{0}', expected 'section/key=value'")]
    InvalidOverride(String),
}
