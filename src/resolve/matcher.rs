// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Correlates a resolved artifact back to the declared dependency edge that
//! requested it, recovering the original version constraint.

use crate::lockfile::{ModuleId, RootComponent};

/// Returns the version constraint the root component declared for `module`,
/// or `None` when no declared edge targets it.
///
/// Matching compares module identity only (group + name): the resolved
/// version may differ from the requested range. A `None` means the artifact
/// arrived purely transitively and is excluded from descriptor discovery.
///
/// When multiple edges target the same module the most specific constraint
/// wins: a bounded range beats a bare version or wildcard, remaining ties
/// break to the lexicographically smallest string. This keeps the choice
/// deterministic regardless of edge order.
#[must_use]
pub fn requested_range<'a>(module: &ModuleId, root: &'a RootComponent) -> Option<&'a str> {
    root.dependencies
        .iter()
        .filter(|edge| edge.module == *module)
        .map(|edge| edge.requested.as_str())
        .min_by(|a, b| {
            specificity(b)
                .cmp(&specificity(a))
                .then_with(|| a.cmp(b))
        })
}

/// Constraint specificity rank: 2 = bounded range, 1 = bare version, 0 =
/// wildcard/empty.
fn specificity(constraint: &str) -> u8 {
    let trimmed = constraint.trim();
    if trimmed.is_empty() || trimmed == "*" || trimmed == "+" {
        0
    } else if trimmed.starts_with('[') || trimmed.starts_with('(') {
        2
    } else {
        1
    }
}
