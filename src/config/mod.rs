// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Configuration management for tableau-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local tableau.toml (cwd)
//! 3. --ini files
//! 4. TABLEAU_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! Sections are separated by `__` so keys that themselves contain an
//! underscore stay addressable:
//!
//! ```text
//! TABLEAU_LOADER__NAME=javafml           → loader.name = "javafml"
//! TABLEAU_LOADER__VERSION_RANGE=[4,)     → loader.version_range = "[4,)"
//! TABLEAU_GENERATION__HEADER=false       → generation.header = false
//! ```
//!
//! # Example tableau.toml
//!
//! ```toml
//! [project]
//! mod_id = "examplemod"
//! version = "1.0.0"
//! display_name = "Example"
//! description = "An example mod."
//!
//! [[dependencies]]
//! mod_id = "oldlib"
//! type = "incompatible"
//! reason = "replaced by examplemod"
//! ```

pub mod loader;
pub mod types;
pub mod validate;


use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::metadata::Mod;

use loader::ConfigLoader;
pub use types::{Config, GenerationConfig, LoaderConfig, LoggingConfig};

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tableau_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("tableau.toml")
    ///     .with_env_prefix("TABLEAU")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// The full mod list the descriptor declares: the primary mod (with the
    /// top-level `[[dependencies]]` merged in) followed by any extra
    /// `[[mods]]` entries.
    #[must_use]
    pub fn declared_mods(&self) -> Vec<Mod> {
        let mut primary = self.project.clone();
        primary.dependencies.extend(self.dependencies.iter().cloned());

        let mut mods = Vec::with_capacity(1 + self.mods.len());
        mods.push(primary);
        mods.extend(self.mods.iter().cloned());
        mods
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_project_options(&mut options);
        self.format_loader_options(&mut options);
        self.format_generation_options(&mut options);
        self.format_logging_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_project_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("project.mod_id".into(), self.project.mod_id.clone());
        options.insert("project.version".into(), self.project.version.clone());
        options.insert(
            "project.display_name".into(),
            self.project.display_name.clone(),
        );
        options.insert(
            "project.dependencies".into(),
            (self.project.dependencies.len() + self.dependencies.len()).to_string(),
        );
        if !self.mods.is_empty() {
            options.insert("project.extra_mods".into(), self.mods.len().to_string());
        }
    }

    fn format_loader_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("loader.name".into(), self.loader.name.clone());
        options.insert(
            "loader.version_range".into(),
            self.loader.version_range.clone(),
        );
    }

    fn format_generation_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "generation.output".into(),
            self.generation.output.display().to_string(),
        );
        options.insert(
            "generation.lockfile".into(),
            self.generation.lockfile.display().to_string(),
        );
        options.insert(
            "generation.header".into(),
            self.generation.header.to_string(),
        );
        options.insert(
            "generation.license".into(),
            self.generation.license.clone().unwrap_or_default(),
        );
        for (source_set, dir) in &self.access_transformers {
            options.insert(
                format!("access_transformers.{source_set}"),
                dir.display().to_string(),
            );
        }
    }

    fn format_logging_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "logging.console_level".into(),
            self.logging.console_level.as_u8().to_string(),
        );
        options.insert(
            "logging.file_level".into(),
            self.logging.file_level.as_u8().to_string(),
        );
        options.insert(
            "logging.log_file".into(),
            self.logging
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }
}
