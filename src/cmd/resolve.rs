// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Resolve command implementation for tableau-rs.

use crate::cli::resolve::ResolveArgs;
use crate::config::Config;
use crate::error::Result;
use crate::lockfile::Lockfile;
use crate::resolve::discover_lockfile;

/// Main handler for the resolve command: prints the dependencies the
/// lockfile would contribute to the descriptor, one per line.
///
/// Unlike generation, the lockfile must exist here; asking to see discovered
/// dependencies without a snapshot is a usage error.
///
/// # Errors
///
/// Returns an error if the lockfile is missing, unreadable, or malformed.
pub async fn run_resolve_command(args: &ResolveArgs, config: &Config) -> Result<()> {
    let path = args
        .lockfile
        .clone()
        .unwrap_or_else(|| config.generation.lockfile.clone());

    let lockfile = Lockfile::load(&path).await?;
    let discovered = discover_lockfile(&lockfile).await?;

    if discovered.is_empty() {
        println!("No mod dependencies discovered");
        return Ok(());
    }

    for dependency in &discovered {
        println!(
            "{} {} ({})",
            dependency.mod_id,
            dependency.version_range.as_deref().unwrap_or("*"),
            dependency.kind
        );
    }
    Ok(())
}
