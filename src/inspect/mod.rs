// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Artifact jar inspection.
//!
//! ```text
//! inspect_jar(jar, range, required)
//!     |
//!     v
//! read_descriptor(jar) ---- absent descriptor --> Ok([])
//!     |   open zip in place (no temp extraction)
//!     |   META-INF/neoforge.mods.toml
//!     |   META-INF/neoforged.mods.toml (legacy)
//!     v
//! [[mods]] entries, blank modId skipped
//!     |
//!     v
//! ModDescriptorEntry { mod_id, version_range, required }
//! ```
//!
//! Plenty of resolved jars are plain libraries, not mods: a missing
//! descriptor is a normal outcome, never an error. Failures opening or
//! parsing a single jar are recoverable: [`inspect_jar`] logs them and
//! substitutes an empty result so one bad dependency cannot fail metadata
//! deduction for all the others.

mod descriptor;


use std::fs::File;
use std::io::Read as _;
use std::path::Path;

use tracing::{debug, warn};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{InspectError, Result};

/// Descriptor paths probed inside a jar, in order.
pub const DESCRIPTOR_ENTRIES: [&str; 2] = [
    "META-INF/neoforge.mods.toml",
    "META-INF/neoforged.mods.toml",
];

/// An extracted record of one mod found inside a resolved artifact.
///
/// Created during resolution and consumed immediately into the aggregate
/// set; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModDescriptorEntry {
    pub mod_id: String,
    pub version_range: String,
    pub required: bool,
}

/// Reads the embedded mod descriptor of `jar`, returning the mod ids it
/// declares in descriptor-file order.
///
/// The jar is opened in place and the handle is dropped on every exit path.
/// A jar without a descriptor entry yields `Ok(vec![])`.
///
/// # Errors
///
/// Returns an [`InspectError`] when the archive cannot be opened, the
/// descriptor entry cannot be read, or its TOML is malformed. Callers on the
/// resolution path want [`inspect_jar`] instead, which absorbs these.
pub fn read_descriptor(jar: &Path) -> Result<Vec<String>> {
    let file = File::open(jar).map_err(|e| InspectError::OpenArchive {
        path: jar.to_path_buf(),
        source: Box::new(ZipError::Io(e)),
    })?;
    let mut archive = ZipArchive::new(file).map_err(|e| InspectError::OpenArchive {
        path: jar.to_path_buf(),
        source: Box::new(e),
    })?;

    for entry_name in DESCRIPTOR_ENTRIES {
        let mut entry = match archive.by_name(entry_name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => continue,
            Err(e) => {
                return Err(InspectError::ReadEntry {
                    path: jar.to_path_buf(),
                    entry: entry_name.to_string(),
                    message: e.to_string(),
                }
                .into());
            }
        };

        let mut content = String::new();
        entry
            .read_to_string(&mut content)
            .map_err(|e| InspectError::ReadEntry {
                path: jar.to_path_buf(),
                entry: entry_name.to_string(),
                message: e.to_string(),
            })?;

        let parsed = descriptor::EmbeddedDescriptor::parse(&content).map_err(|e| {
            InspectError::ParseDescriptor {
                path: jar.to_path_buf(),
                entry: entry_name.to_string(),
                message: e.to_string(),
            }
        })?;

        return Ok(parsed.mod_ids().map(ToString::to_string).collect());
    }

    // Not a mod jar. Normal outcome, not an error.
    Ok(Vec::new())
}

/// Inspects one resolved artifact jar and emits a [`ModDescriptorEntry`] per
/// embedded mod, carrying the caller-supplied version range and required
/// flag.
///
/// Recoverable by design: any failure is logged at warn level (full detail
/// at debug) and an empty result is returned.
#[must_use]
pub fn inspect_jar(jar: &Path, version_range: &str, required: bool) -> Vec<ModDescriptorEntry> {
    match read_descriptor(jar) {
        Ok(mod_ids) => mod_ids
            .into_iter()
            .map(|mod_id| ModDescriptorEntry {
                mod_id,
                version_range: version_range.to_string(),
                required,
            })
            .collect(),
        Err(e) => {
            warn!(jar = %jar.display(), "skipping unreadable dependency jar");
            debug!(jar = %jar.display(), error = %format!("{e:#}"), "inspection failure detail");
            Vec::new()
        }
    }
}
