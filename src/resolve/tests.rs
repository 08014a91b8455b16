// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

use super::resolver::{discover_configuration, discover_dependencies, discover_lockfile};
use crate::lockfile::{
    ComponentId, DeclaredDependency, Lockfile, ModuleId, ResolvedArtifact, ResolvedConfiguration,
    RootComponent,
};
use crate::metadata::DependencyKind;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

fn write_mod_jar(dir: &Path, name: &str, mod_ids: &[&str]) -> PathBuf {
    let mut descriptor = String::from("modLoader = \"javafml\"\n");
    for id in mod_ids {
        descriptor.push_str(&format!("\n[[mods]]\nmodId = \"{id}\"\n"));
    }

    let path = dir.join(name);
    let file = std::fs::File::create(&path).expect("create jar");
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file("META-INF/neoforge.mods.toml", SimpleFileOptions::default())
        .expect("start entry");
    writer.write_all(descriptor.as_bytes()).expect("write");
    writer.finish().expect("finish");
    path
}

fn artifact(file: PathBuf, group: &str, name: &str, version: &str) -> ResolvedArtifact {
    ResolvedArtifact {
        file,
        id: ComponentId {
            module: ModuleId::new(group, name),
            version: version.to_string(),
        },
    }
}

fn edge(group: &str, name: &str, requested: &str) -> DeclaredDependency {
    DeclaredDependency {
        module: ModuleId::new(group, name),
        requested: requested.to_string(),
    }
}

#[tokio::test]
async fn test_end_to_end_required_discovery() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jar = write_mod_jar(dir.path(), "coollib-1.4.2.jar", &["coollib"]);

    let configuration = ResolvedConfiguration {
        artifacts: vec![artifact(jar, "com.example", "coollib", "1.4.2")],
        root: RootComponent {
            dependencies: vec![edge("com.example", "coollib", "[1.0,2.0)")],
        },
    };

    let discovered = discover_configuration(&configuration, true)
        .await
        .expect("discover");

    assert_eq!(discovered.len(), 1);
    let dep = &discovered[0];
    assert_eq!(dep.mod_id, "coollib");
    assert_eq!(dep.version_range.as_deref(), Some("[1.0,2.0)"));
    assert_eq!(dep.kind, DependencyKind::Required);
}

#[tokio::test]
async fn test_optional_configuration_yields_optional_kind() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jar = write_mod_jar(dir.path(), "extra.jar", &["extra"]);

    let configuration = ResolvedConfiguration {
        artifacts: vec![artifact(jar, "com.example", "extra", "0.3.0")],
        root: RootComponent {
            dependencies: vec![edge("com.example", "extra", "[0.3,)")],
        },
    };

    let discovered = discover_configuration(&configuration, false)
        .await
        .expect("discover");
    assert_eq!(discovered[0].kind, DependencyKind::Optional);
}

#[tokio::test]
async fn test_unmatched_artifact_dropped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jar = write_mod_jar(dir.path(), "transitive.jar", &["transitive"]);

    // Artifact resolved, but no declared edge requested it.
    let configuration = ResolvedConfiguration {
        artifacts: vec![artifact(jar, "com.example", "transitive", "1.0")],
        root: RootComponent::default(),
    };

    let discovered = discover_configuration(&configuration, true)
        .await
        .expect("discover");
    assert!(discovered.is_empty());
}

#[tokio::test]
async fn test_duplicate_mod_id_across_artifacts_deduplicated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = write_mod_jar(dir.path(), "x-1.jar", &["x"]);
    let second = write_mod_jar(dir.path(), "x-shaded.jar", &["x"]);

    let configuration = ResolvedConfiguration {
        artifacts: vec![
            artifact(first, "com.example", "x", "1.0"),
            artifact(second, "org.shadow", "x-shaded", "1.0"),
        ],
        root: RootComponent {
            dependencies: vec![
                edge("com.example", "x", "[1.0,2.0)"),
                edge("org.shadow", "x-shaded", "[1.0,)"),
            ],
        },
    };

    let discovered = discover_configuration(&configuration, true)
        .await
        .expect("discover");

    assert_eq!(discovered.len(), 1, "mod id 'x' must appear exactly once");
    // First occurrence wins; artifacts iterate in declared order
    assert_eq!(discovered[0].version_range.as_deref(), Some("[1.0,2.0)"));
}

#[tokio::test]
async fn test_multi_mod_artifact_emits_all_entries() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jar = write_mod_jar(dir.path(), "bundle.jar", &["beta", "alpha"]);

    let configuration = ResolvedConfiguration {
        artifacts: vec![artifact(jar, "com.example", "bundle", "2.0")],
        root: RootComponent {
            dependencies: vec![edge("com.example", "bundle", "[2.0,3.0)")],
        },
    };

    let discovered = discover_configuration(&configuration, true)
        .await
        .expect("discover");

    let ids: Vec<_> = discovered.iter().map(|d| d.mod_id.as_str()).collect();
    // Aggregate output is ordered by mod id, not by descriptor order
    assert_eq!(ids, vec!["alpha", "beta"]);
}

#[tokio::test]
async fn test_unreadable_jar_does_not_poison_others() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = write_mod_jar(dir.path(), "good.jar", &["good"]);
    let corrupt = dir.path().join("corrupt.jar");
    std::fs::write(&corrupt, b"not a zip").expect("write");

    let configuration = ResolvedConfiguration {
        artifacts: vec![
            artifact(corrupt, "com.example", "corrupt", "1.0"),
            artifact(good, "com.example", "good", "1.0"),
        ],
        root: RootComponent {
            dependencies: vec![
                edge("com.example", "corrupt", "[1,)"),
                edge("com.example", "good", "[1,)"),
            ],
        },
    };

    let discovered = discover_configuration(&configuration, true)
        .await
        .expect("one bad jar must not fail the configuration");
    assert_eq!(discovered.len(), 1);
    assert_eq!(discovered[0].mod_id, "good");
}

#[tokio::test]
async fn test_mod_in_both_configurations_kept_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jar = write_mod_jar(dir.path(), "coollib-1.4.2.jar", &["coollib"]);

    // The same artifact resolves in both configurations of the snapshot.
    let configuration = ResolvedConfiguration {
        artifacts: vec![artifact(jar, "com.example", "coollib", "1.4.2")],
        root: RootComponent {
            dependencies: vec![edge("com.example", "coollib", "[1.0,2.0)")],
        },
    };
    let lockfile = Lockfile {
        required: configuration.clone(),
        optional: configuration,
    };

    let discovered = discover_lockfile(&lockfile).await.expect("discover");

    assert_eq!(discovered.len(), 1, "one record per mod id per snapshot");
    assert_eq!(discovered[0].mod_id, "coollib");
    // Required runs first and wins over the optional record
    assert_eq!(discovered[0].kind, DependencyKind::Required);
}

#[tokio::test]
async fn test_deferred_input_failure_is_fatal() {
    let artifacts = async {
        Err::<Vec<ResolvedArtifact>, anyhow::Error>(anyhow::anyhow!("configuration unresolvable"))
    };
    let root = async { Ok::<_, anyhow::Error>(RootComponent::default()) };

    let result = discover_dependencies(artifacts, root, true).await;
    assert!(result.is_err(), "resolution failures must propagate");
}
