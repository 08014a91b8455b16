// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Resolution lockfile: the consumed contract of the build's dependency
//! resolution engine.
//!
//! ```text
//! tableau.lock.json
//!   required: ResolvedConfiguration
//!   optional: ResolvedConfiguration
//!       |
//!       +-- artifacts: [ {file, group, name, version} ]
//!       +-- root:      { dependencies: [ {group, name, requested} ] }
//! ```
//!
//! The resolution engine runs before tableau does and is opaque to it; this
//! module only deserializes its snapshot. Artifacts are immutable once
//! resolution completes. Read or parse failures are fatal
//! ([`crate::error::ResolveError`]): a broken snapshot means a broken build.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ResolveError, Result};

/// A module identity: group + name, *without* version.
///
/// Matching resolved artifacts back to declared edges always compares module
/// identity only; a resolved version may legitimately differ from any
/// requested range.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModuleId {
    pub group: String,
    pub name: String,
}

impl ModuleId {
    #[must_use]
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

/// The component identity a resolved artifact was attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentId {
    #[serde(flatten)]
    pub module: ModuleId,
    pub version: String,
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.version)
    }
}

/// An artifact file on disk plus the component identity it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedArtifact {
    /// Path to the artifact file (usually a jar).
    pub file: PathBuf,
    /// Resolved component identity.
    #[serde(flatten)]
    pub id: ComponentId,
}

/// One declared dependency edge of the resolution root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredDependency {
    #[serde(flatten)]
    pub module: ModuleId,
    /// The originally-requested version constraint, e.g. `[1.0,2.0)`.
    pub requested: String,
}

/// The resolution graph's root component: the consumer project's own
/// declared dependency edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootComponent {
    #[serde(default)]
    pub dependencies: Vec<DeclaredDependency>,
}

/// One fully-resolved dependency configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolvedConfiguration {
    pub artifacts: Vec<ResolvedArtifact>,
    pub root: RootComponent,
}

/// The whole resolution snapshot: one configuration for required mod
/// dependencies, one for optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Lockfile {
    pub required: ResolvedConfiguration,
    pub optional: ResolvedConfiguration,
}

impl Lockfile {
    /// Parse a lockfile from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::LockfileParse`] on malformed JSON.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let lockfile = serde_json::from_str(content).map_err(|e| ResolveError::LockfileParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(lockfile)
    }

    /// Load a lockfile from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::LockfileRead`] if the file cannot be read and
    /// [`ResolveError::LockfileParse`] if it is not a valid snapshot. Both
    /// are fatal to the surrounding command.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ResolveError::LockfileRead {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        Self::parse(path, &content)
    }
}
