// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Generate | Resolve | Inspect | Options | Inis | Version
//! ```

use std::process::ExitCode;

use tableau_rs::cli::global::GlobalOptions;
use tableau_rs::cli::{self, Command};
use tableau_rs::cmd::config::{run_inis_command, run_options_command};
use tableau_rs::cmd::generate::run_generate_command;
use tableau_rs::cmd::inspect::run_inspect_command;
use tableau_rs::cmd::resolve::run_resolve_command;
use tableau_rs::config::loader::ConfigLoader;
use tableau_rs::config::{Config, LoggingConfig};
use tableau_rs::logging::init_logging;
use tableau_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    // Lenient pre-load purely for the [logging] section; command handlers
    // re-load with validation. Failures here surface during that load.
    let logging = build_config_loader(&cli.global)
        .build_unvalidated()
        .map(|config| config.logging)
        .unwrap_or_default();

    let log_config = build_log_config(&cli.global, &logging);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions, logging: &LoggingConfig) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(logging.console_level);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(logging.file_level);

    let log_file = global
        .log_file
        .clone()
        .or_else(|| logging.log_file.clone());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file.map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Generate(args)) => match load_config(&cli.global) {
            Ok(config) => run_generate_command(args, &config, cli.global.dry).await,
            Err(e) => Err(e),
        },
        Some(Command::Resolve(args)) => match load_config(&cli.global) {
            Ok(config) => run_resolve_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::Inspect(args)) => run_inspect_command(args),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional("tableau.toml");
    }
    loader.with_env_prefix("TABLEAU")
}

fn load_config(global: &GlobalOptions) -> tableau_rs::error::Result<Config> {
    let loader = build_config_loader(global);
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
