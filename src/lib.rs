// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          list / get / path / cwd
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |           env             |
//!              |  lock() -> EnvGuard       |
//!              |  accessors + search path  |
//!              '---------------------------'
//!
//!   +-----------------------------------------+
//!   |  foundation   config, error, logging    |
//!   +-----------------------------------------+
//! ```
//!
//! The `env` module is the library surface: one process-wide guard
//! serializing every access to the native environment block, string and
//! `OsString` accessors on top of it, and interpretation of the search path
//! and working directory. Everything else supports the `envlock` binary
//! built around that surface.

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
