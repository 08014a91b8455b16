// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Dependency discovery over a resolved configuration.
//!
//! # Architecture
//!
//! ```text
//! discover_dependencies(artifacts_fut, root_fut, required)
//!          |
//!     try_join (deferred pair, forced together on demand)
//!          |
//!          v
//!   per resolved artifact:
//!     matcher::requested_range ---- no declared edge --> dropped
//!          |
//!          v
//!     inspect::inspect_jar ---- unreadable jar --> warn, empty
//!          |
//!          v
//!   dedupe by mod id (first occurrence wins)
//!          |
//!          v
//!   Vec<ModDependency>, ordered by mod id
//! ```
//!
//! Extraction order across artifacts is unspecified; the aggregate result is
//! a set. Within a single artifact, entries keep descriptor-file order.
//!
//! `discover_lockfile` applies the same set semantics across the whole
//! snapshot: a mod id discovered through both the required and the optional
//! configuration keeps its required record.

pub mod matcher;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use resolver::{discover_configuration, discover_dependencies, discover_lockfile};
