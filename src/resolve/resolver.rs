// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Orchestrates matcher + inspector over a whole resolved configuration.

use std::collections::BTreeMap;
use std::future::Future;

use futures_util::future;
use tracing::{debug, trace};

use super::matcher;
use crate::error::Result;
use crate::inspect;
use crate::lockfile::{Lockfile, ResolvedArtifact, ResolvedConfiguration, RootComponent};
use crate::metadata::ModDependency;

/// Discovers mod dependencies from a resolved configuration whose artifact
/// collection and root component are two independently deferred
/// computations.
///
/// Both inputs are combined with a join and transformed once both are
/// available; neither is forced before the caller awaits the result. The
/// `required` flag determines the kind of every discovered dependency.
///
/// Duplicated mod ids keep their first occurrence (set semantics): all
/// occurrences of one mod id within a fixed configuration are expected to
/// carry the same range anyway. Output is ordered by mod id so downstream
/// generation stays deterministic.
///
/// # Errors
///
/// Fails when either deferred input fails; an unresolvable configuration is
/// fatal. Per-jar inspection failures are absorbed (see [`inspect`]).
pub async fn discover_dependencies<A, R>(
    artifacts: A,
    root: R,
    required: bool,
) -> Result<Vec<ModDependency>>
where
    A: Future<Output = Result<Vec<ResolvedArtifact>>>,
    R: Future<Output = Result<RootComponent>>,
{
    let (artifacts, root) = future::try_join(artifacts, root).await?;

    let mut discovered: BTreeMap<String, ModDependency> = BTreeMap::new();
    for artifact in &artifacts {
        let Some(range) = matcher::requested_range(&artifact.id.module, &root) else {
            // Transitive-only inclusion; nothing requested it directly.
            trace!(artifact = %artifact.id, "no declared edge, dropped");
            continue;
        };

        for entry in inspect::inspect_jar(&artifact.file, range, required) {
            debug!(
                mod_id = %entry.mod_id,
                version_range = %entry.version_range,
                artifact = %artifact.id,
                "discovered mod dependency"
            );
            discovered
                .entry(entry.mod_id.clone())
                .or_insert_with(|| ModDependency::discovered(
                    entry.mod_id,
                    entry.version_range,
                    entry.required,
                ));
        }
    }

    Ok(discovered.into_values().collect())
}

/// Discovers mod dependencies across both of a lockfile's configurations.
///
/// Identity is the mod id across the whole snapshot, not per configuration:
/// a mod discovered through both keeps one record. The required
/// configuration runs first, so its record wins over the optional one.
/// Output is ordered by mod id.
///
/// # Errors
///
/// See [`discover_dependencies`].
pub async fn discover_lockfile(lockfile: &Lockfile) -> Result<Vec<ModDependency>> {
    let required = discover_configuration(&lockfile.required, true).await?;
    let optional = discover_configuration(&lockfile.optional, false).await?;

    let mut merged: BTreeMap<String, ModDependency> = BTreeMap::new();
    for dependency in required.into_iter().chain(optional) {
        merged.entry(dependency.mod_id.clone()).or_insert(dependency);
    }
    Ok(merged.into_values().collect())
}

/// Convenience wrapper over an already-loaded configuration snapshot.
///
/// # Errors
///
/// See [`discover_dependencies`].
pub async fn discover_configuration(
    configuration: &ResolvedConfiguration,
    required: bool,
) -> Result<Vec<ModDependency>> {
    let artifacts = configuration.artifacts.clone();
    let root = configuration.root.clone();
    discover_dependencies(async move { Ok(artifacts) }, async move { Ok(root) }, required).await
}
