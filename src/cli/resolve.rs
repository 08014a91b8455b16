// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Arguments for the `resolve` command.

use clap::Args;
use std::path::PathBuf;

/// Print the dependencies discovered from the resolution lockfile without
/// generating anything.
#[derive(Debug, Clone, Default, Args)]
pub struct ResolveArgs {
    /// Resolution lockfile to read. Overrides `generation.lockfile`.
    #[arg(long = "lockfile", value_name = "FILE")]
    pub lockfile: Option<PathBuf>,
}
