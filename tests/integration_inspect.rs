// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Integration tests for strict jar inspection, as used by `tableau inspect`.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use tableau_rs::inspect::read_descriptor;
use zip::write::SimpleFileOptions;

fn write_jar(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).expect("create jar");
    let mut writer = zip::ZipWriter::new(file);
    for (entry_name, content) in entries {
        writer
            .start_file(*entry_name, SimpleFileOptions::default())
            .expect("start entry");
        writer.write_all(content.as_bytes()).expect("write entry");
    }
    writer.finish().expect("finish jar");
    path
}

#[test]
fn multi_mod_jar_keeps_descriptor_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let descriptor = r#"
modLoader = "javafml"

[[mods]]
modId = "zeta"
version = "1.0.0"

[[mods]]
modId = "alpha"
version = "1.0.0"
"#;
    let jar = write_jar(
        dir.path(),
        "bundle.jar",
        &[("META-INF/neoforge.mods.toml", descriptor)],
    );

    let mod_ids = read_descriptor(&jar).expect("read");
    assert_eq!(mod_ids, vec!["zeta".to_string(), "alpha".to_string()]);
}

#[test]
fn missing_jar_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = read_descriptor(&dir.path().join("absent.jar"));
    assert!(result.is_err());
}

#[test]
fn non_archive_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("not-a.jar");
    std::fs::write(&path, "plain text").expect("write file");

    let result = read_descriptor(&path);
    assert!(result.is_err());
}

#[test]
fn malformed_descriptor_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jar = write_jar(
        dir.path(),
        "broken.jar",
        &[("META-INF/neoforge.mods.toml", "not [ valid toml")],
    );

    let result = read_descriptor(&jar);
    assert!(result.is_err());
}

#[test]
fn preferred_descriptor_shadows_legacy_entry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jar = write_jar(
        dir.path(),
        "both.jar",
        &[
            (
                "META-INF/neoforge.mods.toml",
                "[[mods]]\nmodId = \"current\"\nversion = \"1.0.0\"\n",
            ),
            (
                "META-INF/neoforged.mods.toml",
                "[[mods]]\nmodId = \"legacy\"\nversion = \"1.0.0\"\n",
            ),
        ],
    );

    let mod_ids = read_descriptor(&jar).expect("read");
    assert_eq!(mod_ids, vec!["current".to_string()]);
}
