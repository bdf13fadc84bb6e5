//! Reader for gettext PO catalogues, backed by `polib`.
//!
//! The metadata header never becomes an entry. Plural messages have no
//! singular `msgstr`, so they are exposed with an empty value.

use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use polib::catalog::Catalog;
use polib::po_file::{self, POParseError};
use thiserror::Error;
use tracing::debug;

use super::{CatalogEntry, TranslationFileReader};

/// Reads `.po` files from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct PoFileReader;

impl PoFileReader {
    /// Creates a new reader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// A PO catalogue that `polib` could not open or parse.
#[derive(Debug, Error)]
#[error("failed to read catalogue '{path}': {source}")]
pub struct PoReadError {
    /// Catalogue path.
    pub path: Utf8PathBuf,
    /// Failure reported by the parser, including I/O and UTF-8 errors.
    #[source]
    pub source: POParseError,
}

impl TranslationFileReader for PoFileReader {
    type Error = PoReadError;

    fn read_entries(&self, path: &Utf8Path) -> Result<Vec<CatalogEntry>, Self::Error> {
        let catalog = po_file::parse(path.as_std_path()).map_err(|source| PoReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let entries = catalog_entries(&catalog);
        debug!(catalogue = %path, entries = entries.len(), "read PO catalogue");
        Ok(entries)
    }
}

/// Parses PO text into entries, in file order.
///
/// # Errors
///
/// Returns [`POParseError`] when the text has no metadata header, contains an
/// unknown escape sequence, or is not valid UTF-8.
///
/// # Examples
///
/// ```rust
/// use koopa::parse_entries;
///
/// let text = "msgid \"\"\nmsgstr \"Language: en-US\\n\"\n\nmsgid \"greeting\"\nmsgstr \"Hello\"\n";
/// let entries = parse_entries(text.as_bytes()).unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].key, "greeting");
/// assert_eq!(entries[0].value, "Hello");
/// ```
pub fn parse_entries(source: impl Read) -> Result<Vec<CatalogEntry>, POParseError> {
    po_file::parse_from_reader(source).map(|catalog| catalog_entries(&catalog))
}

fn catalog_entries(catalog: &Catalog) -> Vec<CatalogEntry> {
    catalog
        .messages()
        .map(|message| CatalogEntry::new(message.msgid(), message.msgstr().unwrap_or_default()))
        .collect()
}
