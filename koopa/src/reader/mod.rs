//! Catalogue readers.
//!
//! The translator never parses files itself. It hands the resolved path to a
//! [`TranslationFileReader`], which returns the catalogue's entries in file
//! order. [`PoFileReader`] covers gettext PO catalogues; tests and embedders
//! can plug in any other source by implementing the trait.

use camino::Utf8Path;

mod po;

pub use po::{PoFileReader, PoReadError, parse_entries};
pub use polib::po_file::POParseError;

/// One message from a catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Message identifier matched against the terminal key.
    pub key: String,
    /// Translated text, returned verbatim.
    pub value: String,
}

impl CatalogEntry {
    /// Creates an entry from a key and its translated text.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Reads a catalogue file into an ordered list of entries.
///
/// Implementations are called once per lookup and must not assume the file
/// is unchanged between calls.
///
/// # Examples
///
/// ```rust
/// use camino::Utf8Path;
/// use koopa::{CatalogEntry, TranslationFileReader};
///
/// struct Fixed;
///
/// impl TranslationFileReader for Fixed {
///     type Error = std::convert::Infallible;
///
///     fn read_entries(&self, _path: &Utf8Path) -> Result<Vec<CatalogEntry>, Self::Error> {
///         Ok(vec![CatalogEntry::new("greeting", "Hello")])
///     }
/// }
///
/// let entries = Fixed.read_entries(Utf8Path::new("messages.po")).unwrap();
/// assert_eq!(entries[0].value, "Hello");
/// ```
pub trait TranslationFileReader: Send + Sync {
    /// Error raised when the file cannot be read or parsed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the entries stored at `path`, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when the file is unreadable or malformed.
    fn read_entries(&self, path: &Utf8Path) -> Result<Vec<CatalogEntry>, Self::Error>;
}

impl<R: TranslationFileReader + ?Sized> TranslationFileReader for &R {
    type Error = R::Error;

    fn read_entries(&self, path: &Utf8Path) -> Result<Vec<CatalogEntry>, Self::Error> {
        (**self).read_entries(path)
    }
}

impl<R: TranslationFileReader + ?Sized> TranslationFileReader for std::sync::Arc<R> {
    type Error = R::Error;

    fn read_entries(&self, path: &Utf8Path) -> Result<Vec<CatalogEntry>, Self::Error> {
        (**self).read_entries(path)
    }
}
