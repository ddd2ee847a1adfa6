// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   List | Get | Path | Cwd | Options | Version
//!
//! Exit codes: 0 success, 1 `get` on an unbound variable, 2 failure.
//! ```

use std::process::ExitCode;

use envlock::cli::global::GlobalOptions;
use envlock::cli::{self, Command};
use envlock::cmd::config::run_options_command;
use envlock::cmd::inspect::{run_get_command, run_list_command};
use envlock::cmd::path::{run_cwd_command, run_path_command};
use envlock::config::Config;
use envlock::config::loader::ConfigLoader;
use envlock::logging::{LogConfig, init_logging};

fn main() -> ExitCode {
    let cli = cli::parse();

    // Version answers without touching config, so a broken envlock.toml
    // cannot break `envlock version`; the default config stands in since
    // the command reads none of it.
    if matches!(cli.command, Some(Command::Version)) {
        return dispatch_command(&cli, &Config::default());
    }

    let Ok(config) = load_config(&cli.global) else {
        return ExitCode::from(2);
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::from(2);
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::List(args)) => run_list_command(args, config),
        Some(Command::Get(args)) => match run_get_command(args, config) {
            Ok(true) => Ok(()),
            // Unbound is an outcome, not a failure: silent, exit code 1.
            Ok(false) => return ExitCode::from(1),
            Err(e) => Err(e),
        },
        Some(Command::Path) => run_path_command(config),
        Some(Command::Cwd) => run_cwd_command(config),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> envlock::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional("envlock.toml");
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("ENVLOCK");
    for raw in global.to_config_overrides() {
        loader = loader.apply_override(&raw)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> envlock::error::Result<Config> {
    build_config_loader(global)
        .and_then(ConfigLoader::build)
        .map_err(|e| {
            eprintln!("Failed to load config: {e:#}");
            e
        })
}
