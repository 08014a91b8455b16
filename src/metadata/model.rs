// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Domain model for generated mod metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How a dependency relates to the depending mod.
///
/// Serialized lowercase both in configuration and in the generated
/// descriptor (`type = "required"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    #[default]
    Required,
    Optional,
    Incompatible,
    Discouraged,
}

impl DependencyKind {
    /// Whether this kind requires a human-readable `reason`.
    ///
    /// Enforced at configuration-validation time; the descriptor renderer
    /// itself tolerates an absent reason.
    #[must_use]
    pub const fn requires_reason(self) -> bool {
        matches!(self, Self::Incompatible | Self::Discouraged)
    }

    /// Kind derived from a resolved configuration's `required` flag.
    #[must_use]
    pub const fn from_required(required: bool) -> Self {
        if required { Self::Required } else { Self::Optional }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::Optional => write!(f, "optional"),
            Self::Incompatible => write!(f, "incompatible"),
            Self::Discouraged => write!(f, "discouraged"),
        }
    }
}

/// Load-order hint between the depending mod and the dependency.
///
/// Configuration accepts lowercase; the descriptor wants uppercase
/// (`ordering = "BEFORE"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadOrdering {
    #[default]
    None,
    Before,
    After,
}

impl fmt::Display for LoadOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Before => write!(f, "BEFORE"),
            Self::After => write!(f, "AFTER"),
        }
    }
}

/// Which physical distribution a dependency applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Both,
    Client,
    Server,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Both => write!(f, "BOTH"),
            Self::Client => write!(f, "CLIENT"),
            Self::Server => write!(f, "SERVER"),
        }
    }
}

/// One dependency record of a mod. Identity is the mod id: records discovered
/// through different paths are deduplicated by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModDependency {
    pub mod_id: String,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
    pub version_range: Option<String>,
    /// Mandatory for incompatible/discouraged kinds (validated, not rendered
    /// as mandatory).
    pub reason: Option<String>,
    pub ordering: LoadOrdering,
    pub side: Side,
}

impl Default for ModDependency {
    fn default() -> Self {
        Self {
            mod_id: String::new(),
            kind: DependencyKind::Required,
            version_range: None,
            reason: None,
            ordering: LoadOrdering::None,
            side: Side::Both,
        }
    }
}

impl ModDependency {
    /// A plain required/optional dependency on `mod_id` bounded by
    /// `version_range`, as discovered from a resolved artifact.
    #[must_use]
    pub fn discovered(mod_id: impl Into<String>, version_range: impl Into<String>, required: bool) -> Self {
        Self {
            mod_id: mod_id.into(),
            kind: DependencyKind::from_required(required),
            version_range: Some(version_range.into()),
            ..Self::default()
        }
    }
}

/// One declared mod of the current project.
///
/// Values are frozen by the time generation runs; the generator never
/// mutates them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Mod {
    pub mod_id: String,
    pub version: String,
    pub display_name: String,
    pub description: String,
    /// Source image; rendered as the packaged logo path when set.
    pub logo_file: Option<PathBuf>,
    pub credits: Option<String>,
    pub authors: Option<String>,
    pub update_json_url: Option<String>,
    pub display_url: Option<String>,
    pub dependencies: Vec<ModDependency>,
}

impl Mod {
    /// The in-jar path the mod's logo is packaged under, if one is configured.
    #[must_use]
    pub fn packaged_logo_path(&self) -> Option<String> {
        self.logo_file
            .as_ref()
            .map(|_| format!("META-INF/Tableau/Logos/{}.png", self.mod_id))
    }
}

/// One access transformer file contributed by a source set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccessTransformer {
    pub source_set: String,
    pub file_name: String,
}

impl AccessTransformer {
    /// The in-jar path the transformer is packaged under.
    #[must_use]
    pub fn packaged_path(&self) -> String {
        format!(
            "META-INF/Tableau/AccessTransformers/{}/{}",
            self.source_set, self.file_name
        )
    }
}
