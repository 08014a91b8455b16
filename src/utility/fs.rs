// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

use crate::error::Result;
use flume::bounded;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Finds files matching a glob pattern using parallel traversal.
///
/// Uses the `wax` crate for glob matching combined with
/// `ignore::WalkParallel`. Results are sorted so callers that emit them into
/// generated output stay deterministic across runs.
///
/// # Arguments
/// * `root` - The root directory to search from
/// * `pattern` - Glob pattern to match (e.g., "**/*.cfg", "*.png")
///
/// # Errors
///
/// Returns an error if:
/// - The root directory does not exist.
/// - The glob pattern is invalid.
///
/// # Example
/// ```no_run
/// use tableau_rs::utility::fs::find_files;
///
/// let transformers = find_files("src/main/accesstransformers", "**/*.cfg")?;
/// for file in transformers {
///     println!("{}", file.display());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn find_files<P: AsRef<Path>>(root: P, pattern: &str) -> Result<Vec<PathBuf>> {
    use wax::{Glob, Program};

    let root = root.as_ref();

    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let glob =
        Glob::new(pattern).map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))?;

    // Bounded channel for lock-free collection
    let (tx, rx) = bounded::<PathBuf>(1000);
    let glob = Arc::new(glob);
    let root_path = root.to_path_buf();

    let mut builder = WalkBuilder::new(root);
    builder.hidden(true);
    builder.git_ignore(true);
    builder.git_global(true);
    builder.git_exclude(true);

    let parallel = builder.build_parallel();

    parallel.run(|| {
        let tx = tx.clone();
        let glob = Arc::clone(&glob);
        let root_path = root_path.clone();

        Box::new(move |entry_result| {
            if let Ok(entry) = entry_result
                && entry.file_type().is_some_and(|ft| ft.is_file())
                && let Ok(rel_path) = entry.path().strip_prefix(&root_path)
                && glob.is_match(rel_path)
            {
                let _ = tx.send(entry.path().to_path_buf());
            }
            ignore::WalkState::Continue
        })
    });

    drop(tx);

    // WalkParallel discovery order is nondeterministic; sort before returning
    let mut files: Vec<PathBuf> = rx.iter().collect();
    files.sort();
    Ok(files)
}

/// Returns the file name of a path as a `String`, if it has a valid UTF-8 one.
#[must_use]
pub fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(ToString::to_string)
}
