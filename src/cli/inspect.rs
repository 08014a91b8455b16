// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Arguments for the `inspect` command.

use clap::Args;
use std::path::PathBuf;

/// Dump the embedded mod descriptor entries of a single jar.
///
/// Unlike resolution, this surfaces archive and parse errors instead of
/// skipping the jar.
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// The jar file to inspect.
    #[arg(value_name = "JAR")]
    pub jar: PathBuf,
}
