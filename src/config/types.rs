// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Configuration types for tableau-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: [project] primary mod
//!         [loader]  modLoader + loaderVersion
//!         [generation] output, lockfile, header, license
//!         [[mods]]  additional bundled mods
//!         [[dependencies]] primary mod's declared dependencies
//!         [access_transformers] source set -> directory
//!         [logging]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::metadata::{Mod, ModDependency};

/// Mod loader identification written to the descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Loader language provider, e.g. `javafml`.
    pub name: String,
    /// Accepted loader version range.
    pub version_range: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            name: "javafml".to_string(),
            version_range: "[1,)".to_string(),
        }
    }
}

/// Options controlling descriptor generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Where the generated descriptor is written.
    pub output: PathBuf,
    /// Resolution snapshot consumed for dependency discovery.
    pub lockfile: PathBuf,
    /// Whether the generated-file header comment is emitted.
    pub header: bool,
    /// Declared project license; the license component is active when set.
    pub license: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("src/main/resources/META-INF/neoforge.mods.toml"),
            lockfile: PathBuf::from("tableau.lock.json"),
            header: true,
            license: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level for stdout output (0-5).
    pub console_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_level: LogLevel,
    /// Path to log file; file logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: LogLevel::INFO,
            file_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The primary mod of this project.
    pub project: Mod,
    /// Loader identification.
    pub loader: LoaderConfig,
    /// Generation options.
    pub generation: GenerationConfig,
    /// Additional mods bundled in the same artifact.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mods: Vec<Mod>,
    /// Declared dependencies of the primary mod. Equivalent to listing them
    /// under `[[project.dependencies]]`; both are merged.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ModDependency>,
    /// Access transformer directories, keyed by source set name. Each
    /// directory is scanned for `*.cfg` files at generation time.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub access_transformers: BTreeMap<String, PathBuf>,
    /// Logging configuration.
    pub logging: LoggingConfig,
}
