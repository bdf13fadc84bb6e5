//! The translator: construction, validation and lookup.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{L10nError, L10nResult};
use crate::key_path::KeyPath;
use crate::reader::{PoFileReader, TranslationFileReader};
use crate::resolver::resolve_key;
use crate::route::{ResolvedPath, RouteBuilder};
use crate::{BASE_LOCALE, DEFAULT_FILE_BASE_NAME};

/// Resolves dotted key paths to translated strings stored beneath a root
/// directory.
///
/// A translator is immutable and holds no state between calls; every lookup
/// probes the filesystem and re-reads the catalogue. It can be shared across
/// threads whenever its reader can.
///
/// # Examples
///
/// ```rust,no_run
/// use koopa::Translator;
///
/// # fn run() -> koopa::L10nResult<()> {
/// let translator = Translator::new("tests/mocked_translations")?;
/// let polish = translator.translate("first_level.mockedTestId", "pl-PL")?;
/// let english = translator.translate_base("first_level.mockedTestId")?;
/// # let _ = (polish, english);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Translator<R = PoFileReader> {
    base_path: Utf8PathBuf,
    file_base_name: String,
    reader: R,
}

/// Builds a [`Translator`] with a custom file base name or reader.
#[derive(Debug, Clone)]
#[must_use]
pub struct TranslatorBuilder<R = PoFileReader> {
    base_path: Utf8PathBuf,
    file_base_name: String,
    reader: R,
}

impl Translator {
    /// Creates a PO-backed translator rooted at `base_path`, using the default
    /// file base name `messages`.
    ///
    /// # Errors
    ///
    /// Returns [`L10nError::DirectoryNotFound`] when `base_path` is not an
    /// existing directory.
    pub fn new(base_path: impl Into<Utf8PathBuf>) -> L10nResult<Self> {
        Self::builder(base_path).try_build()
    }

    /// Creates a PO-backed translator whose locale-specific catalogues are
    /// named `{file_base_name}.{locale}.po`.
    ///
    /// The base-locale fallback is still read from `messages.po`.
    ///
    /// # Errors
    ///
    /// Returns [`L10nError::DirectoryNotFound`] when `base_path` is not an
    /// existing directory.
    pub fn with_file_base_name(
        base_path: impl Into<Utf8PathBuf>,
        file_base_name: impl Into<String>,
    ) -> L10nResult<Self> {
        Self::builder(base_path)
            .file_base_name(file_base_name)
            .try_build()
    }

    /// Starts building a translator rooted at `base_path`.
    pub fn builder(base_path: impl Into<Utf8PathBuf>) -> TranslatorBuilder {
        TranslatorBuilder::new(base_path)
    }
}

impl<R: TranslationFileReader> Translator<R> {
    /// Translates `key_path` for `locale`.
    ///
    /// The leading segments of the key select a directory beneath the root;
    /// the final segment is looked up in that directory's catalogue. Locales
    /// without their own catalogue fall back to `messages.po`.
    ///
    /// # Errors
    ///
    /// - [`L10nError::FileNotFound`] when no catalogue exists for the
    ///   directory.
    /// - [`L10nError::KeyNotFound`] when the catalogue lacks the final
    ///   segment.
    /// - [`L10nError::Catalog`] when the reader cannot load the catalogue.
    pub fn translate(&self, key_path: &str, locale: &str) -> L10nResult<String> {
        let key = KeyPath::parse(key_path);
        let route = self.route(key.directory_segments(), locale)?;
        resolve_key(&self.reader, &route, key.terminal_key())
    }

    /// Translates `key_path` for the base locale.
    ///
    /// # Errors
    ///
    /// See [`Translator::translate`].
    pub fn translate_base(&self, key_path: &str) -> L10nResult<String> {
        self.translate(key_path, BASE_LOCALE)
    }

    /// Reports which catalogue a lookup for `key_path` and `locale` would read,
    /// without reading it.
    ///
    /// # Errors
    ///
    /// Returns [`L10nError::FileNotFound`] when no catalogue exists for the
    /// key's directory.
    pub fn resolve_path(&self, key_path: &str, locale: &str) -> L10nResult<ResolvedPath> {
        let key = KeyPath::parse(key_path);
        self.route(key.directory_segments(), locale)
    }

    fn route(&self, directory_segments: &[&str], locale: &str) -> L10nResult<ResolvedPath> {
        RouteBuilder::new(&self.base_path, &self.file_base_name).build(directory_segments, locale)
    }
}

impl<R> Translator<R> {
    /// Translation root.
    #[must_use]
    pub fn base_path(&self) -> &Utf8Path {
        &self.base_path
    }

    /// Base name used for locale-specific catalogues.
    #[must_use]
    pub fn file_base_name(&self) -> &str {
        &self.file_base_name
    }

    /// Catalogue reader.
    #[must_use]
    pub const fn reader(&self) -> &R {
        &self.reader
    }
}

impl TranslatorBuilder {
    /// Creates a builder with the default base name and the PO reader.
    pub fn new(base_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            file_base_name: DEFAULT_FILE_BASE_NAME.to_owned(),
            reader: PoFileReader::new(),
        }
    }
}

impl<R> TranslatorBuilder<R> {
    /// Sets the base name for locale-specific catalogues.
    pub fn file_base_name(mut self, file_base_name: impl Into<String>) -> Self {
        self.file_base_name = file_base_name.into();
        self
    }

    /// Replaces the catalogue reader.
    pub fn reader<S: TranslationFileReader>(self, reader: S) -> TranslatorBuilder<S> {
        TranslatorBuilder {
            base_path: self.base_path,
            file_base_name: self.file_base_name,
            reader,
        }
    }

    /// Validates the root directory and builds the translator.
    ///
    /// # Errors
    ///
    /// Returns [`L10nError::DirectoryNotFound`] carrying the configured path
    /// when it is not an existing directory.
    pub fn try_build(self) -> L10nResult<Translator<R>> {
        if !self.base_path.is_dir() {
            return Err(L10nError::directory_not_found(self.base_path));
        }
        Ok(Translator {
            base_path: self.base_path,
            file_base_name: self.file_base_name,
            reader: self.reader,
        })
    }
}
