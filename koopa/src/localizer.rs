//! Fallible-to-optional localisation facade.
//!
//! `Localizer` lets application code ask for a string and supply its own
//! fallback text instead of handling [`L10nError`] at every call site.
//! [`LocaleTranslator`] binds a [`Translator`] to one locale and reports every
//! failed lookup through a [`LookupIssueReporter`] before returning `None`.
//!
//! The facade is lossy. `lookup` returns `None` for every failure, so callers
//! cannot tell a missing directory, catalogue or key apart, nor see a reader
//! error. Only the reporter receives the [`L10nError`]. Call
//! [`Translator::translate`] directly when the error kind matters.

use std::fmt;
use std::sync::Arc;

use crate::error::L10nError;
use crate::reader::{PoFileReader, TranslationFileReader};
use crate::translator::Translator;

/// Provides localised strings by key path.
///
/// The trait is object-safe so applications can hold an
/// `Arc<dyn Localizer>` and swap implementations at runtime.
pub trait Localizer: Send + Sync {
    /// Looks up `key_path`, returning `None` when no translation is available.
    ///
    /// Every failure collapses to `None`; the [`L10nError`] kind is dropped.
    fn lookup(&self, key_path: &str) -> Option<String>;

    /// Resolves `key_path`, returning `fallback` when no translation exists.
    ///
    /// # Examples
    /// ```rust
    /// use koopa::{Localizer, NoOpLocalizer};
    ///
    /// assert_eq!(NoOpLocalizer::new().message("menu.open", "Open"), "Open");
    /// ```
    fn message(&self, key_path: &str, fallback: &str) -> String {
        self.lookup(key_path).unwrap_or_else(|| fallback.to_owned())
    }
}

/// Localiser that never translates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpLocalizer;

impl NoOpLocalizer {
    /// Creates a new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Localizer for NoOpLocalizer {
    fn lookup(&self, _key_path: &str) -> Option<String> {
        None
    }
}

/// A lookup that failed inside a [`LocaleTranslator`].
#[derive(Debug)]
pub struct LookupIssue<'a> {
    /// Key path that was requested.
    pub key_path: &'a str,
    /// Locale the translator is bound to.
    pub locale: &'a str,
    /// Why the lookup failed.
    pub error: &'a L10nError,
}

/// Callback invoked for every failed lookup.
pub type LookupIssueReporter = Arc<dyn Fn(&LookupIssue<'_>) + Send + Sync>;

/// A [`Translator`] bound to a single locale.
///
/// # Examples
///
/// ```rust,no_run
/// use koopa::{LocaleTranslator, Localizer, Translator};
///
/// # fn run() -> koopa::L10nResult<()> {
/// let polish = LocaleTranslator::new(Translator::new("translations")?, "pl-PL");
/// let label = polish.message("menu.file.open", "Open");
/// # let _ = label;
/// # Ok(())
/// # }
/// ```
pub struct LocaleTranslator<R = PoFileReader> {
    translator: Translator<R>,
    locale: String,
    report_issue: LookupIssueReporter,
}

impl<R> LocaleTranslator<R> {
    /// Binds `translator` to `locale`, logging failed lookups with `tracing`.
    pub fn new(translator: Translator<R>, locale: impl Into<String>) -> Self {
        Self {
            translator,
            locale: locale.into(),
            report_issue: default_reporter(),
        }
    }

    /// Replaces the hook that observes failed lookups.
    #[must_use]
    pub fn with_issue_reporter(mut self, reporter: LookupIssueReporter) -> Self {
        self.report_issue = reporter;
        self
    }

    /// Locale this translator is bound to.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Underlying translator.
    #[must_use]
    pub const fn translator(&self) -> &Translator<R> {
        &self.translator
    }
}

impl<R: TranslationFileReader> Localizer for LocaleTranslator<R> {
    fn lookup(&self, key_path: &str) -> Option<String> {
        match self.translator.translate(key_path, &self.locale) {
            Ok(value) => Some(value),
            Err(error) => {
                (self.report_issue)(&LookupIssue {
                    key_path,
                    locale: &self.locale,
                    error: &error,
                });
                None
            }
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for LocaleTranslator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleTranslator")
            .field("translator", &self.translator)
            .field("locale", &self.locale)
            .field("report_issue", &"<reporter>")
            .finish()
    }
}

fn default_reporter() -> LookupIssueReporter {
    Arc::new(|issue: &LookupIssue<'_>| {
        tracing::warn!(
            key_path = issue.key_path,
            locale = issue.locale,
            error = %issue.error,
            "translation lookup failed"
        );
    })
}
