// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Deserialization of an embedded `neoforge.mods.toml`.
//!
//! Read-only and deliberately loose: only the `mods` list and each entry's
//! `modId` matter for dependency discovery. Everything else a descriptor may
//! carry is ignored.

use serde::Deserialize;

/// The subset of an embedded descriptor tableau reads.
#[derive(Debug, Default, Deserialize)]
pub(super) struct EmbeddedDescriptor {
    #[serde(default)]
    pub(super) mods: Vec<EmbeddedModEntry>,
}

/// One `[[mods]]` entry of an embedded descriptor.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct EmbeddedModEntry {
    #[serde(default)]
    pub(super) mod_id: String,
}

impl EmbeddedDescriptor {
    /// Parse descriptor TOML content.
    pub(super) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Mod ids with non-blank values, in descriptor-file order.
    pub(super) fn mod_ids(&self) -> impl Iterator<Item = &str> {
        self.mods
            .iter()
            .map(|entry| entry.mod_id.trim())
            .filter(|id| !id.is_empty())
    }
}
