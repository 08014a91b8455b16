// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Shared filesystem utilities.
//!
//! ```text
//! fs:  find_files()  ignore::WalkParallel + wax glob
//!      sorted output for deterministic generation
//! ```

pub mod fs;
