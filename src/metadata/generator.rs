// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! End-to-end descriptor generation.
//!
//! ```text
//! DescriptorGenerator::generate(output)
//!     |
//!     +-- create parent dirs
//!     +-- load existing descriptor (preserve foreign keys/comments)
//!     +-- component.write(doc) for each, any order
//!     +-- render
//!     '-- temp file + atomic rename into place
//! ```
//!
//! Unchanged component state reproduces the output byte for byte, which is
//! what incremental builds cache on.

use std::io::Write as _;
use std::path::Path;

use tracing::{debug, info};

use super::components::MetadataComponent;
use super::doc::DescriptorDoc;
use crate::error::{DescriptorError, Result};

/// Drives generation of the on-disk descriptor from the active component set.
pub struct DescriptorGenerator {
    components: Vec<Box<dyn MetadataComponent>>,
}

impl DescriptorGenerator {
    /// A generator over an explicit, caller-assembled component list.
    ///
    /// Zero components is valid: generation still produces a minimal (empty
    /// but parseable) descriptor. Callers that want to skip generation
    /// entirely must gate the call itself.
    #[must_use]
    pub fn new(components: Vec<Box<dyn MetadataComponent>>) -> Self {
        Self { components }
    }

    /// Number of active components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Render the descriptor against optional pre-existing content without
    /// touching the filesystem. Used for dry runs and tests.
    ///
    /// # Errors
    ///
    /// Fails on malformed existing content or a component failure; both are
    /// fatal.
    pub fn render(&self, existing: Option<&str>, output: &Path) -> Result<String> {
        let mut doc = match existing {
            Some(content) => {
                DescriptorDoc::parse(content).map_err(|e| DescriptorError::ParseExisting {
                    path: output.to_path_buf(),
                    message: e.message().to_string(),
                })?
            }
            None => DescriptorDoc::new(),
        };

        for component in &self.components {
            // Component failures are tableau bugs and propagate uncaught.
            component.write(&mut doc)?;
        }

        Ok(doc.render())
    }

    /// Generate the descriptor file at `output`.
    ///
    /// Loads any pre-existing content first so keys and comments not owned
    /// by tableau survive, then persists atomically (temp file + rename).
    ///
    /// # Errors
    ///
    /// Any I/O failure, a malformed pre-existing descriptor, or a component
    /// failure aborts generation. No partial descriptor is ever left at
    /// `output`.
    pub fn generate(&self, output: &Path) -> Result<()> {
        let parent = match output.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| DescriptorError::CreateDirs {
            path: parent.to_path_buf(),
            source: e,
        })?;

        let existing = if output.exists() {
            let content =
                std::fs::read_to_string(output).map_err(|e| DescriptorError::WriteFailed {
                    path: output.to_path_buf(),
                    source: e,
                })?;
            debug!(path = %output.display(), "merging into existing descriptor");
            Some(content)
        } else {
            None
        };

        let rendered = self.render(existing.as_deref(), output)?;

        // Temp file lives next to the output so the final rename never
        // crosses filesystems; the handle is released on every exit path.
        let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(|e| {
            DescriptorError::WriteFailed {
                path: output.to_path_buf(),
                source: e,
            }
        })?;
        temp.write_all(rendered.as_bytes())
            .and_then(|()| temp.flush())
            .map_err(|e| DescriptorError::WriteFailed {
                path: output.to_path_buf(),
                source: e,
            })?;
        temp.persist(output)
            .map_err(|e| DescriptorError::PersistFailed {
                path: output.to_path_buf(),
                message: e.error.to_string(),
            })?;

        info!(
            path = %output.display(),
            components = self.components.len(),
            "descriptor generated"
        );
        Ok(())
    }
}
