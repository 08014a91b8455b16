// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Arguments for the `generate` command.

use clap::Args;
use std::path::PathBuf;

/// Generate the `neoforge.mods.toml` descriptor.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Resolution lockfile to discover dependencies from.
    /// Overrides `generation.lockfile`; discovery is skipped entirely when
    /// neither exists.
    #[arg(long = "lockfile", value_name = "FILE")]
    pub lockfile: Option<PathBuf>,

    /// Output path for the generated descriptor.
    /// Overrides `generation.output`.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}
