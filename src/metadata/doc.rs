// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! The shared output document components write into.
//!
//! Wraps a `toml_edit::DocumentMut` so pre-existing keys and comments that
//! tableau does not own survive regeneration. The file-level header comment
//! is staged separately and attached to the first item at render time, since
//! components run in no particular order and the header's anchor key may not
//! exist yet when the header component runs.

use toml_edit::{Decor, DocumentMut, Item, RawString, TomlError, value};

/// A mutable descriptor document shared by all metadata components.
#[derive(Debug, Default, Clone)]
pub struct DescriptorDoc {
    doc: DocumentMut,
    header: Option<String>,
}

impl DescriptorDoc {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse pre-existing descriptor content, preserving its formatting.
    ///
    /// # Errors
    ///
    /// Returns the underlying TOML error when the content is malformed; the
    /// generator treats that as fatal rather than overwriting manual edits.
    pub fn parse(content: &str) -> Result<Self, TomlError> {
        Ok(Self {
            doc: content.parse()?,
            header: None,
        })
    }

    /// Stage the file-level header comment block (one `#` line per entry).
    ///
    /// The last staged header wins; regeneration replaces any previous header
    /// so the output stays byte-stable.
    pub fn set_header<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut header = String::new();
        for line in lines {
            let line = line.as_ref();
            if line.is_empty() {
                header.push_str("#\n");
            } else {
                header.push_str("# ");
                header.push_str(line);
                header.push('\n');
            }
        }
        header.push('\n');
        self.header = Some(header);
    }

    /// Set a top-level string value, replacing any existing one in place.
    pub fn set_string(&mut self, key: &str, val: &str) {
        self.doc[key] = value(val);
    }

    /// Direct access to the underlying document for structured inserts.
    pub fn doc_mut(&mut self) -> &mut DocumentMut {
        &mut self.doc
    }

    /// Read access to the underlying document.
    #[must_use]
    pub const fn doc(&self) -> &DocumentMut {
        &self.doc
    }

    /// Render the document, attaching the staged header to the first item.
    #[must_use]
    pub fn render(&self) -> String {
        let Some(header) = &self.header else {
            return self.doc.to_string();
        };

        let mut doc = self.doc.clone();
        if set_leading_trivia(&mut doc, header) {
            doc.to_string()
        } else {
            // Nothing to anchor the comment to: emit it alone.
            let mut out = header.clone();
            out.push_str(&doc.to_string());
            out
        }
    }
}

/// Prepends `prefix` to the leading trivia of the document's first item.
/// Returns false when the document has no items.
fn set_leading_trivia(doc: &mut DocumentMut, prefix: &str) -> bool {
    let Some((mut key, item)) = doc.iter_mut().next() else {
        return false;
    };
    match item {
        Item::Table(table) => {
            merge_prefix(table.decor_mut(), prefix);
        }
        Item::ArrayOfTables(tables) => {
            if let Some(table) = tables.iter_mut().next() {
                merge_prefix(table.decor_mut(), prefix);
            }
        }
        _ => {
            merge_prefix(key.leaf_decor_mut(), prefix);
        }
    }
    true
}

/// Sets `header` as the decor prefix, keeping any trivia that was already
/// there. A previous copy of the same header is stripped first so repeated
/// generation does not stack banners.
fn merge_prefix(decor: &mut Decor, header: &str) {
    let existing = decor
        .prefix()
        .and_then(RawString::as_str)
        .unwrap_or("")
        .to_string();
    let remainder = existing.strip_prefix(header).unwrap_or(&existing);
    decor.set_prefix(format!("{header}{remainder}"));
}
