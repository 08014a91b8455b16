// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Inspect command implementation for tableau-rs.

use crate::cli::inspect::InspectArgs;
use crate::error::Result;
use crate::inspect::read_descriptor;

/// Main handler for the inspect command: dumps the mod ids declared by a
/// single jar's embedded descriptor.
///
/// This is the strict path. Where resolution would log and skip an
/// unreadable jar, inspection of an explicitly named jar fails loudly.
///
/// # Errors
///
/// Returns an error if the archive cannot be opened or its descriptor entry
/// is malformed.
pub fn run_inspect_command(args: &InspectArgs) -> Result<()> {
    let mod_ids = read_descriptor(&args.jar)?;

    if mod_ids.is_empty() {
        println!("{}: no mod descriptor", args.jar.display());
        return Ok(());
    }

    for mod_id in &mod_ids {
        println!("{mod_id}");
    }
    Ok(())
}
