// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

use super::components::{
    AccessTransformersComponent, HeaderComponent, LicenseComponent, LoaderVersionComponent,
    MetadataComponent, ModsListComponent,
};
use super::doc::DescriptorDoc;
use super::generator::DescriptorGenerator;
use super::model::{AccessTransformer, DependencyKind, LoadOrdering, Mod, ModDependency, Side};
use std::path::{Path, PathBuf};

fn example_mod() -> Mod {
    Mod {
        mod_id: "examplemod".to_string(),
        version: "1.0.0".to_string(),
        display_name: "Example".to_string(),
        description: "desc".to_string(),
        ..Mod::default()
    }
}

fn render(components: Vec<Box<dyn MetadataComponent>>) -> String {
    DescriptorGenerator::new(components)
        .render(None, Path::new("neoforge.mods.toml"))
        .expect("render")
}

fn parse_back(rendered: &str) -> toml::Value {
    toml::from_str(rendered).expect("generated descriptor must be valid TOML")
}

#[test]
fn test_loader_version_component() {
    let mut doc = DescriptorDoc::new();
    LoaderVersionComponent::new("javafml", "[4,)")
        .write(&mut doc)
        .expect("write");
    insta::assert_snapshot!(doc.render(), @r#"
    modLoader = "javafml"
    loaderVersion = "[4,)"
    "#);
}

#[test]
fn test_license_component() {
    let mut doc = DescriptorDoc::new();
    LicenseComponent::new("MIT").write(&mut doc).expect("write");
    insta::assert_snapshot!(doc.render(), @r#"license = "MIT""#);
}

#[test]
fn test_header_precedes_keys() {
    let rendered = render(vec![
        Box::new(LicenseComponent::new("MIT")),
        Box::new(HeaderComponent::default()),
    ]);
    // Header lands first even though the component ran last
    assert!(
        rendered.starts_with("# This file is generated by tableau"),
        "{rendered}"
    );
    assert!(rendered.contains("license = \"MIT\""), "{rendered}");
    parse_back(&rendered);
}

#[test]
fn test_header_alone_still_valid() {
    let rendered = render(vec![Box::new(HeaderComponent::default())]);
    assert!(rendered.starts_with('#'), "{rendered}");
    parse_back(&rendered);
}

#[test]
fn test_minimal_mod_block_has_exactly_four_keys() {
    let rendered = render(vec![Box::new(ModsListComponent::new(vec![example_mod()]))]);
    let parsed = parse_back(&rendered);

    let mods = parsed["mods"].as_array().expect("mods array");
    assert_eq!(mods.len(), 1);
    let block = mods[0].as_table().expect("mod table");

    assert_eq!(block["modId"].as_str(), Some("examplemod"));
    assert_eq!(block["version"].as_str(), Some("1.0.0"));
    assert_eq!(block["displayName"].as_str(), Some("Example"));
    assert_eq!(block["description"].as_str(), Some("desc"));
    assert_eq!(block.len(), 4, "unset optional keys must be omitted");
    assert!(!block.contains_key("updateJSONURL"));
    assert!(!block.contains_key("displayURL"));
    assert!(!block.contains_key("logoFile"));
}

#[test]
fn test_description_renders_as_multiline_literal() {
    let mut entry = example_mod();
    entry.description = "Line one\nLine two".to_string();
    let rendered = render(vec![Box::new(ModsListComponent::new(vec![entry]))]);
    assert!(rendered.contains("'''"), "{rendered}");
    let parsed = parse_back(&rendered);
    assert_eq!(
        parsed["mods"][0]["description"].as_str(),
        Some("Line one\nLine two")
    );
}

#[test]
fn test_description_with_triple_quote_falls_back() {
    let mut entry = example_mod();
    entry.description = "three ''' quotes".to_string();
    let rendered = render(vec![Box::new(ModsListComponent::new(vec![entry]))]);
    let parsed = parse_back(&rendered);
    assert_eq!(
        parsed["mods"][0]["description"].as_str(),
        Some("three ''' quotes")
    );
}

#[test]
fn test_logo_file_renders_packaged_path() {
    let mut entry = example_mod();
    entry.logo_file = Some(PathBuf::from("art/logo.png"));
    let rendered = render(vec![Box::new(ModsListComponent::new(vec![entry]))]);
    let parsed = parse_back(&rendered);
    assert_eq!(
        parsed["mods"][0]["logoFile"].as_str(),
        Some("META-INF/Tableau/Logos/examplemod.png")
    );
}

#[test]
fn test_dependency_block_fields() {
    let mut entry = example_mod();
    entry.dependencies = vec![ModDependency {
        mod_id: "coollib".to_string(),
        kind: DependencyKind::Required,
        version_range: Some("[1.0,2.0)".to_string()),
        reason: None,
        ordering: LoadOrdering::After,
        side: Side::Client,
    }];
    let rendered = render(vec![Box::new(ModsListComponent::new(vec![entry]))]);
    let parsed = parse_back(&rendered);

    let deps = parsed["dependencies"]["examplemod"]
        .as_array()
        .expect("dependency tables");
    assert_eq!(deps.len(), 1);
    let dep = deps[0].as_table().expect("dep table");
    assert_eq!(dep["modId"].as_str(), Some("coollib"));
    assert_eq!(dep["type"].as_str(), Some("required"));
    assert_eq!(dep["versionRange"].as_str(), Some("[1.0,2.0)"));
    assert_eq!(dep["ordering"].as_str(), Some("AFTER"));
    assert_eq!(dep["side"].as_str(), Some("CLIENT"));
}

#[test]
fn test_incompatible_without_reason_renders_tolerantly() {
    let mut entry = example_mod();
    entry.dependencies = vec![ModDependency {
        mod_id: "oldlib".to_string(),
        kind: DependencyKind::Incompatible,
        ..ModDependency::default()
    }];
    // Render must not fail; the record simply has no reason key.
    let rendered = render(vec![Box::new(ModsListComponent::new(vec![entry]))]);
    let parsed = parse_back(&rendered);
    let dep = parsed["dependencies"]["examplemod"][0]
        .as_table()
        .expect("dep table");
    assert_eq!(dep["type"].as_str(), Some("incompatible"));
    assert!(!dep.contains_key("reason"));
}

#[test]
fn test_no_dependencies_no_dependencies_key() {
    let rendered = render(vec![Box::new(ModsListComponent::new(vec![example_mod()]))]);
    let parsed = parse_back(&rendered);
    assert!(parsed.get("dependencies").is_none(), "{rendered}");
}

#[test]
fn test_access_transformers_sorted_and_pathed() {
    let component = AccessTransformersComponent::new(vec![
        AccessTransformer {
            source_set: "main".to_string(),
            file_name: "b.cfg".to_string(),
        },
        AccessTransformer {
            source_set: "client".to_string(),
            file_name: "a.cfg".to_string(),
        },
    ]);
    let rendered = render(vec![Box::new(component)]);
    let parsed = parse_back(&rendered);

    let entries = parsed["accessTransformers"].as_array().expect("array");
    assert_eq!(
        entries[0]["file"].as_str(),
        Some("META-INF/Tableau/AccessTransformers/client/a.cfg")
    );
    assert_eq!(
        entries[1]["file"].as_str(),
        Some("META-INF/Tableau/AccessTransformers/main/b.cfg")
    );
}

#[test]
fn test_access_transformers_empty_removes_stale_key() {
    let existing = "[[accessTransformers]]\nfile = \"stale\"\n";
    let rendered = DescriptorGenerator::new(vec![Box::new(AccessTransformersComponent::new(
        vec![],
    ))])
    .render(Some(existing), Path::new("neoforge.mods.toml"))
    .expect("render");
    let parsed = parse_back(&rendered);
    assert!(parsed.get("accessTransformers").is_none());
}

#[test]
fn test_zero_components_minimal_valid_output() {
    let rendered = render(vec![]);
    parse_back(&rendered);
}

#[test]
fn test_render_preserves_foreign_keys_and_comments() {
    let existing = "# hand-written note\ncustomKey = \"kept\"\n";
    let generator = DescriptorGenerator::new(vec![Box::new(LicenseComponent::new("MIT"))]);
    let rendered = generator
        .render(Some(existing), Path::new("neoforge.mods.toml"))
        .expect("render");

    assert!(rendered.contains("# hand-written note"), "{rendered}");
    let parsed = parse_back(&rendered);
    assert_eq!(parsed["customKey"].as_str(), Some("kept"));
    assert_eq!(parsed["license"].as_str(), Some("MIT"));
}

#[test]
fn test_render_rejects_malformed_existing() {
    let generator = DescriptorGenerator::new(vec![]);
    let err = generator
        .render(Some("mods = [broken"), Path::new("neoforge.mods.toml"))
        .expect_err("malformed existing descriptor is fatal");
    assert!(err.to_string().contains("not valid TOML"), "{err}");
}

#[test]
fn test_regeneration_is_byte_identical() {
    let build = || -> Vec<Box<dyn MetadataComponent>> {
        let mut entry = example_mod();
        entry.dependencies = vec![ModDependency::discovered("coollib", "[1.0,2.0)", true)];
        vec![
            Box::new(HeaderComponent::default()),
            Box::new(LoaderVersionComponent::new("javafml", "[4,)")),
            Box::new(LicenseComponent::new("MIT")),
            Box::new(ModsListComponent::new(vec![entry])),
        ]
    };

    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("META-INF/neoforge.mods.toml");

    DescriptorGenerator::new(build())
        .generate(&output)
        .expect("first run");
    let first = std::fs::read(&output).expect("read");

    // Second run loads the first run's output as pre-existing content.
    DescriptorGenerator::new(build())
        .generate(&output)
        .expect("second run");
    let second = std::fs::read(&output).expect("read");

    assert_eq!(first, second, "regeneration must be byte-identical");
}

#[test]
fn test_generate_creates_parent_dirs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("deep/nested/neoforge.mods.toml");
    DescriptorGenerator::new(vec![Box::new(LicenseComponent::new("MIT"))])
        .generate(&output)
        .expect("generate");
    assert!(output.exists());
}

#[test]
fn test_mod_dependency_discovered_defaults() {
    let dep = ModDependency::discovered("coollib", "[1.0,2.0)", false);
    assert_eq!(dep.kind, DependencyKind::Optional);
    assert_eq!(dep.ordering, LoadOrdering::None);
    assert_eq!(dep.side, Side::Both);
    assert!(dep.reason.is_none());
}

#[test]
fn test_kind_reason_policy() {
    assert!(DependencyKind::Incompatible.requires_reason());
    assert!(DependencyKind::Discouraged.requires_reason());
    assert!(!DependencyKind::Required.requires_reason());
    assert!(!DependencyKind::Optional.requires_reason());
}
