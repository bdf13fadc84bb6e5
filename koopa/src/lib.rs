//! Directory-backed translation lookup.
//!
//! Catalogues live in a directory tree that mirrors the leading segments of
//! dotted key paths. Looking up `first_level.mockedTestId` for `pl-PL` reads
//! `{root}/first_level/messages.pl-PL.po` when it exists and
//! `{root}/first_level/messages.po` otherwise, then returns the entry whose
//! identifier is `mockedTestId`.
//!
//! ```rust,no_run
//! use koopa::Translator;
//!
//! # fn run() -> koopa::L10nResult<()> {
//! let translator = Translator::new("tests/mocked_translations")?;
//! assert_eq!(
//!     translator.translate("first_level.mockedTestId", "pl-PL")?,
//!     "This is the Polish mocked translation"
//! );
//! # Ok(())
//! # }
//! ```

mod error;
mod key_path;
mod localizer;
mod reader;
mod resolver;
mod route;
mod settings;
mod translator;

pub use error::{L10nError, L10nResult};
pub use key_path::KeyPath;
pub use localizer::{
    LocaleTranslator, Localizer, LookupIssue, LookupIssueReporter, NoOpLocalizer,
};
pub use reader::{
    CatalogEntry, POParseError, PoFileReader, PoReadError, TranslationFileReader, parse_entries,
};
pub use route::{ResolvedPath, RouteKind};
pub use settings::TranslatorSettings;
pub use translator::{Translator, TranslatorBuilder};

/// Locale whose catalogue every directory falls back to.
pub const BASE_LOCALE: &str = "en-US";

/// Default base name for locale-specific catalogues.
pub const DEFAULT_FILE_BASE_NAME: &str = "messages";

/// Base name of the fallback catalogue, independent of the configured one.
pub const FALLBACK_FILE_BASE_NAME: &str = "messages";

/// Extension shared by every catalogue file.
pub const CATALOG_EXTENSION: &str = "po";
