// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Runs at load time so problems surface before any resolution or
//! generation work starts. Every rejection names the implicated section and
//! tells the user what to change.

use std::sync::LazyLock;

use regex::Regex;

use super::Config;
use crate::error::{ConfigError, Result};
use crate::metadata::{Mod, ModDependency};

/// The loader's mod id rules: lowercase alphanumeric/underscore, starting
/// with a letter, 2-64 characters.
static MOD_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z][a-z0-9_]{1,63}$").expect("mod id pattern is valid"));

/// Validates the loaded configuration.
///
/// # Errors
///
/// Returns the first [`ConfigError`] found: missing/invalid mod ids or
/// versions, or a missing `reason` on an incompatible/discouraged
/// dependency.
pub fn validate(config: &Config) -> Result<()> {
    validate_mod(&config.project, "project")?;
    for entry in &config.mods {
        validate_mod(entry, "mods")?;
    }
    for dependency in &config.dependencies {
        validate_dependency(dependency, "dependencies")?;
    }
    Ok(())
}

fn validate_mod(entry: &Mod, section: &str) -> Result<()> {
    if entry.mod_id.is_empty() {
        return Err(ConfigError::MissingKey {
            section: section.to_string(),
            key: "mod_id".to_string(),
        }
        .into());
    }
    validate_mod_id(&entry.mod_id, section, "mod_id")?;

    if entry.version.is_empty() {
        return Err(ConfigError::MissingKey {
            section: section.to_string(),
            key: "version".to_string(),
        }
        .into());
    }

    for dependency in &entry.dependencies {
        validate_dependency(dependency, section)?;
    }
    Ok(())
}

fn validate_dependency(dependency: &ModDependency, section: &str) -> Result<()> {
    if dependency.mod_id.is_empty() {
        return Err(ConfigError::MissingKey {
            section: section.to_string(),
            key: "mod_id".to_string(),
        }
        .into());
    }
    validate_mod_id(&dependency.mod_id, section, "mod_id")?;

    // Mandatory reason policy for incompatible/discouraged kinds
    if dependency.kind.requires_reason()
        && dependency.reason.as_deref().is_none_or(str::is_empty)
    {
        return Err(ConfigError::InvalidValue {
            section: section.to_string(),
            key: "reason".to_string(),
            message: format!(
                "dependency '{}' is marked {} and needs a reason \
                 (add reason = \"...\" to its block)",
                dependency.mod_id, dependency.kind
            ),
        }
        .into());
    }
    Ok(())
}

fn validate_mod_id(mod_id: &str, section: &str, key: &str) -> Result<()> {
    if MOD_ID.is_match(mod_id) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: format!(
                "'{mod_id}' is not a valid mod id \
                 (lowercase letters, digits and underscores, starting with a letter)"
            ),
        }
        .into())
    }
}
