// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Metadata component model and descriptor generation.
//!
//! # Architecture
//!
//! ```text
//! DescriptorGenerator
//!        |
//!        v
//! [Box<dyn MetadataComponent>]   explicit caller-assembled list
//!   Header | License | LoaderVersion
//!   AccessTransformers | ModsList
//!        |
//!        v
//!   DescriptorDoc  (toml_edit, comment-preserving)
//!        |
//!        v
//!   neoforge.mods.toml  (atomic write)
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`MetadataComponent`] | One fragment able to serialize itself into the shared tree |
//! | [`DescriptorDoc`] | The shared mutable output document |
//! | [`DescriptorGenerator`] | Collects active components, drives one generation run |
//! | [`Mod`] / [`ModDependency`] | The user/local mod model, frozen at generation time |
//!
//! Components are invoked exactly once per run, in any order; the generated
//! file is a deterministic function of component state.

pub mod components;
pub mod doc;
pub mod generator;
pub mod model;

#[cfg(test)]
mod tests;

pub use components::{
    AccessTransformersComponent, HeaderComponent, LicenseComponent, LoaderVersionComponent,
    MetadataComponent, ModsListComponent,
};
pub use doc::DescriptorDoc;
pub use generator::DescriptorGenerator;
pub use model::{AccessTransformer, DependencyKind, LoadOrdering, Mod, ModDependency, Side};
