// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! CLI module for tableau-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! tableau [global options] <command>
//! generate [--lockfile FILE] [--output FILE]
//! resolve [--lockfile FILE]
//! inspect <JAR>
//! options
//! inis
//! version
//! ```

pub mod generate;
pub mod global;
pub mod inspect;
pub mod resolve;


use crate::cli::generate::GenerateArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::inspect::InspectArgs;
use crate::cli::resolve::ResolveArgs;
use clap::{Parser, Subcommand};

/// NeoForge Mod Metadata Toolchain
///
/// Discovers mod dependencies from a resolution snapshot and generates the
/// `neoforge.mods.toml` descriptor.
#[derive(Debug, Parser)]
#[command(
    name = "tableau",
    author,
    version,
    about = "NeoForge mod metadata toolchain",
    long_about = "Discovers mod dependencies from a resolution snapshot\n\
                  (tableau.lock.json) and generates the neoforge.mods.toml\n\
                  descriptor from tableau.toml.\n\n\
                  Invoking `tableau generate` performs a full run. See\n\
                  `tableau <command> --help` for more information about a\n\
                  command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, tableau loads `tableau.toml` from the current\n\
                  directory. Additional files can be layered on top with\n\
                  --ini; later files win. TABLEAU_* environment variables\n\
                  override files."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the neoforge.mods.toml descriptor.
    Generate(GenerateArgs),
    /// Print dependencies discovered from the lockfile.
    Resolve(ResolveArgs),
    /// Dump the embedded descriptor of a single jar.
    Inspect(InspectArgs),
    /// Display current configuration options.
    Options,
    /// Display loaded configuration files.
    Inis,
    /// Display version information.
    Version,
}

/// Parse command line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
