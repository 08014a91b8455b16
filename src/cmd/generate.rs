// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Generate command implementation for tableau-rs.
//!
//! # Generation Pipeline
//!
//! ```text
//! tableau.toml ---------+
//!                       v
//! tableau.lock.json -> discover -> merge (declared wins) -> components
//!                                                               |
//!                                                               v
//!                                               DescriptorGenerator::generate
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{info, warn};

use crate::cli::generate::GenerateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::lockfile::Lockfile;
use crate::metadata::{
    AccessTransformer, AccessTransformersComponent, DescriptorGenerator, HeaderComponent,
    LicenseComponent, LoaderVersionComponent, MetadataComponent, Mod, ModDependency,
    ModsListComponent,
};
use crate::resolve::discover_lockfile;
use crate::utility::fs::{file_name, find_files};

/// Main handler for the generate command.
///
/// # Errors
///
/// Returns an error on an unreadable or malformed lockfile, a malformed
/// pre-existing descriptor, or any write failure. A missing lockfile is not
/// an error; discovery is skipped.
pub async fn run_generate_command(args: &GenerateArgs, config: &Config, dry: bool) -> Result<()> {
    let lockfile_path = args
        .lockfile
        .clone()
        .unwrap_or_else(|| config.generation.lockfile.clone());
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.generation.output.clone());

    let discovered = discover_from_lockfile(&lockfile_path).await?;
    let mods = merge_discovered(config, discovered);
    let components = assemble_components(config, mods)?;
    let generator = DescriptorGenerator::new(components);

    if dry {
        let existing = std::fs::read_to_string(&output).ok();
        let rendered = generator.render(existing.as_deref(), &output)?;
        info!(path = %output.display(), "dry run, descriptor not written");
        print!("{rendered}");
        return Ok(());
    }

    generator.generate(&output)
}

/// Discovers dependencies from the lockfile's required and optional
/// configurations. A missing lockfile yields an empty result.
async fn discover_from_lockfile(path: &Path) -> Result<Vec<ModDependency>> {
    if !path.exists() {
        info!(path = %path.display(), "no resolution lockfile, dependency discovery skipped");
        return Ok(Vec::new());
    }

    let lockfile = Lockfile::load(path).await?;
    let discovered = discover_lockfile(&lockfile).await?;
    info!(
        path = %path.display(),
        count = discovered.len(),
        "dependencies discovered from lockfile"
    );
    Ok(discovered)
}

/// Appends discovered dependencies to the primary mod's declared list.
///
/// Declared entries win: a discovered record whose mod id is already declared
/// (or is one of the project's own bundled mods) is dropped.
fn merge_discovered(config: &Config, discovered: Vec<ModDependency>) -> Vec<Mod> {
    let mut mods = config.declared_mods();

    let own_ids: BTreeSet<&str> = mods.iter().map(|m| m.mod_id.as_str()).collect();
    let declared_ids: BTreeSet<String> = mods[0]
        .dependencies
        .iter()
        .map(|d| d.mod_id.clone())
        .collect();

    let extra: Vec<ModDependency> = discovered
        .into_iter()
        .filter(|d| !declared_ids.contains(&d.mod_id) && !own_ids.contains(d.mod_id.as_str()))
        .collect();
    mods[0].dependencies.extend(extra);
    mods
}

/// Assembles the active component set from configuration and the merged mod
/// list.
fn assemble_components(
    config: &Config,
    mods: Vec<Mod>,
) -> Result<Vec<Box<dyn MetadataComponent>>> {
    let mut components: Vec<Box<dyn MetadataComponent>> = Vec::new();

    if config.generation.header {
        components.push(Box::new(HeaderComponent::default()));
    }
    components.push(Box::new(LoaderVersionComponent::new(
        &config.loader.name,
        &config.loader.version_range,
    )));
    if let Some(license) = &config.generation.license {
        components.push(Box::new(LicenseComponent::new(license)));
    }
    if !config.access_transformers.is_empty() {
        components.push(Box::new(AccessTransformersComponent::new(
            discover_access_transformers(config)?,
        )));
    }
    components.push(Box::new(ModsListComponent::new(mods)));

    Ok(components)
}

/// Scans each configured source-set directory for `*.cfg` transformer files.
/// A missing directory is skipped with a warning; the build may simply not
/// have that source set.
fn discover_access_transformers(config: &Config) -> Result<Vec<AccessTransformer>> {
    let mut transformers = Vec::new();
    for (source_set, dir) in &config.access_transformers {
        if !dir.exists() {
            warn!(
                source_set = %source_set,
                dir = %dir.display(),
                "access transformer directory does not exist, skipped"
            );
            continue;
        }
        for path in find_files(dir, "**/*.cfg")? {
            if let Some(name) = file_name(&path) {
                transformers.push(AccessTransformer {
                    source_set: source_set.clone(),
                    file_name: name,
                });
            }
        }
    }
    Ok(transformers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::DependencyKind;

    fn config_with_declared(mod_id: &str) -> Config {
        let mut config = Config::default();
        config.project.mod_id = "examplemod".to_string();
        config.project.version = "1.0.0".to_string();
        config.dependencies.push(ModDependency {
            mod_id: mod_id.to_string(),
            kind: DependencyKind::Incompatible,
            reason: Some("conflicts with examplemod".to_string()),
            ..ModDependency::default()
        });
        config
    }

    #[test]
    fn test_declared_dependency_beats_discovered() {
        let config = config_with_declared("coollib");
        let discovered = vec![ModDependency::discovered("coollib", "[1.0,2.0)", true)];

        let mods = merge_discovered(&config, discovered);

        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].dependencies.len(), 1);
        assert_eq!(mods[0].dependencies[0].kind, DependencyKind::Incompatible);
    }

    #[test]
    fn test_discovered_appended_after_declared() {
        let config = config_with_declared("oldlib");
        let discovered = vec![ModDependency::discovered("coollib", "[1.0,2.0)", true)];

        let mods = merge_discovered(&config, discovered);

        let ids: Vec<&str> = mods[0]
            .dependencies
            .iter()
            .map(|d| d.mod_id.as_str())
            .collect();
        assert_eq!(ids, vec!["oldlib", "coollib"]);
    }

    #[test]
    fn test_discovered_self_dependency_dropped() {
        let config = config_with_declared("oldlib");
        let discovered = vec![ModDependency::discovered("examplemod", "[1,)", true)];

        let mods = merge_discovered(&config, discovered);

        assert_eq!(mods[0].dependencies.len(), 1);
        assert_eq!(mods[0].dependencies[0].mod_id, "oldlib");
    }

    #[test]
    fn test_assemble_components_minimal() {
        let mut config = Config::default();
        config.generation.header = false;
        let components = assemble_components(&config, config.declared_mods()).unwrap();
        // loader + mods list only
        assert_eq!(components.len(), 2);
    }

    #[test]
    fn test_assemble_components_full() {
        let mut config = Config::default();
        config.generation.license = Some("MIT".to_string());
        config
            .access_transformers
            .insert("main".to_string(), std::env::temp_dir());
        let components = assemble_components(&config, config.declared_mods()).unwrap();
        // header + loader + license + access transformers + mods list
        assert_eq!(components.len(), 5);
    }
}
