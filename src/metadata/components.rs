// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Metadata components: independently-composable fragments of the generated
//! descriptor.
//!
//! Each component merges its own data into the shared [`DescriptorDoc`]
//! exactly once per generation run. Components are stateless transformers:
//! they never read each other's keys and never depend on invocation order.
//! The active set is an explicit list assembled by the caller (see
//! `cmd::generate`), not a runtime registry.
//!
//! A component's `write` failing is a programming error in tableau, not a
//! user data problem: the generator propagates it uncaught rather than
//! producing a partial descriptor.

use toml_edit::{ArrayOfTables, DocumentMut, Item, Table, Value, value};

use super::doc::DescriptorDoc;
use super::model::{AccessTransformer, Mod};
use crate::error::Result;

/// A fragment of descriptor metadata that can serialize itself into the
/// shared output document.
pub trait MetadataComponent {
    /// Merge this component's data into the output document.
    ///
    /// # Errors
    ///
    /// Propagated uncaught by the generator; see module docs.
    fn write(&self, doc: &mut DescriptorDoc) -> Result<()>;
}

/// File-level comment block.
#[derive(Debug, Clone)]
pub struct HeaderComponent {
    lines: Vec<String>,
}

impl HeaderComponent {
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self {
            lines: vec![
                "This file is generated by tableau from tableau.toml.".to_string(),
                "Keys written by tableau are overwritten on every run;".to_string(),
                "other keys and comments are preserved.".to_string(),
            ],
        }
    }
}

impl MetadataComponent for HeaderComponent {
    fn write(&self, doc: &mut DescriptorDoc) -> Result<()> {
        doc.set_header(&self.lines);
        Ok(())
    }
}

/// `modLoader` / `loaderVersion` pair.
#[derive(Debug, Clone)]
pub struct LoaderVersionComponent {
    mod_loader: String,
    loader_version: String,
}

impl LoaderVersionComponent {
    #[must_use]
    pub fn new(mod_loader: impl Into<String>, loader_version: impl Into<String>) -> Self {
        Self {
            mod_loader: mod_loader.into(),
            loader_version: loader_version.into(),
        }
    }
}

impl MetadataComponent for LoaderVersionComponent {
    fn write(&self, doc: &mut DescriptorDoc) -> Result<()> {
        doc.set_string("modLoader", &self.mod_loader);
        doc.set_string("loaderVersion", &self.loader_version);
        Ok(())
    }
}

/// Top-level `license` key.
#[derive(Debug, Clone)]
pub struct LicenseComponent {
    license: String,
}

impl LicenseComponent {
    #[must_use]
    pub fn new(license: impl Into<String>) -> Self {
        Self {
            license: license.into(),
        }
    }
}

impl MetadataComponent for LicenseComponent {
    fn write(&self, doc: &mut DescriptorDoc) -> Result<()> {
        doc.set_string("license", &self.license);
        Ok(())
    }
}

/// `[[accessTransformers]]` array, one entry per packaged transformer file.
#[derive(Debug, Clone, Default)]
pub struct AccessTransformersComponent {
    transformers: Vec<AccessTransformer>,
}

impl AccessTransformersComponent {
    #[must_use]
    pub fn new(mut transformers: Vec<AccessTransformer>) -> Self {
        // Sorted so generation stays byte-stable regardless of discovery order
        transformers.sort();
        Self { transformers }
    }
}

impl MetadataComponent for AccessTransformersComponent {
    fn write(&self, doc: &mut DescriptorDoc) -> Result<()> {
        let doc = doc.doc_mut();
        if self.transformers.is_empty() {
            doc.remove("accessTransformers");
            return Ok(());
        }

        let mut tables = ArrayOfTables::new();
        for transformer in &self.transformers {
            let mut table = Table::new();
            table["file"] = value(transformer.packaged_path());
            tables.push(table);
        }
        doc["accessTransformers"] = Item::ArrayOfTables(tables);
        Ok(())
    }
}

/// `[[mods]]` blocks plus their `[[dependencies.<modId>]]` blocks.
///
/// Owns the `mods` and `dependencies` keys wholesale: both are rebuilt from
/// the model on every run.
#[derive(Debug, Clone, Default)]
pub struct ModsListComponent {
    mods: Vec<Mod>,
}

impl ModsListComponent {
    #[must_use]
    pub fn new(mods: Vec<Mod>) -> Self {
        Self { mods }
    }
}

impl MetadataComponent for ModsListComponent {
    fn write(&self, doc: &mut DescriptorDoc) -> Result<()> {
        let doc = doc.doc_mut();

        let mut mod_tables = ArrayOfTables::new();
        for entry in &self.mods {
            mod_tables.push(mod_table(entry));
        }
        doc["mods"] = Item::ArrayOfTables(mod_tables);

        write_dependency_tables(doc, &self.mods);
        Ok(())
    }
}

fn mod_table(entry: &Mod) -> Table {
    let mut table = Table::new();
    table["modId"] = value(&entry.mod_id);
    table["version"] = value(&entry.version);
    table["displayName"] = value(&entry.display_name);
    table["description"] = Item::Value(multiline_literal(&entry.description));
    if let Some(logo) = entry.packaged_logo_path() {
        table["logoFile"] = value(logo);
    }
    if let Some(credits) = &entry.credits {
        table["credits"] = value(credits);
    }
    if let Some(authors) = &entry.authors {
        table["authors"] = value(authors);
    }
    if let Some(url) = &entry.update_json_url {
        table["updateJSONURL"] = value(url);
    }
    if let Some(url) = &entry.display_url {
        table["displayURL"] = value(url);
    }
    table
}

fn write_dependency_tables(doc: &mut DocumentMut, mods: &[Mod]) {
    doc.remove("dependencies");

    if mods.iter().all(|m| m.dependencies.is_empty()) {
        return;
    }

    let mut root = Table::new();
    root.set_implicit(true);
    doc["dependencies"] = Item::Table(root);

    for entry in mods {
        if entry.dependencies.is_empty() {
            continue;
        }
        let mut tables = ArrayOfTables::new();
        for dependency in &entry.dependencies {
            let mut table = Table::new();
            table["modId"] = value(&dependency.mod_id);
            table["type"] = value(dependency.kind.to_string());
            if let Some(range) = &dependency.version_range {
                table["versionRange"] = value(range);
            }
            table["ordering"] = value(dependency.ordering.to_string());
            table["side"] = value(dependency.side.to_string());
            // Tolerant render: an absent reason is simply omitted, even for
            // kinds where validation demands one.
            if let Some(reason) = &dependency.reason {
                table["reason"] = value(reason);
            }
            tables.push(table);
        }
        doc["dependencies"][&entry.mod_id] = Item::ArrayOfTables(tables);
    }
}

/// Renders a string as a TOML multi-line literal (`'''...'''`) where the
/// content allows it, falling back to a basic string otherwise.
fn multiline_literal(text: &str) -> Value {
    let literal_safe = !text.contains("'''")
        && text
            .chars()
            .all(|c| c == '\n' || c == '\t' || !c.is_control());

    if literal_safe {
        let snippet = format!("v = '''\n{text}'''\n");
        if let Ok(parsed) = snippet.parse::<DocumentMut>()
            && let Some(v) = parsed["v"].as_value()
        {
            return v.clone();
        }
    }
    Value::from(text)
}
