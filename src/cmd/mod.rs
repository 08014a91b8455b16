// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   generate, resolve, inspect, config
//! ```

pub mod config;
pub mod generate;
pub mod inspect;
pub mod resolve;
