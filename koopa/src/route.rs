//! Maps a key path's directory segments and a locale onto a catalogue file.
//!
//! Exactly one level of fallback applies. A non-base locale first tries
//! `{root}/{dir}/{file_base_name}.{locale}.po`; when that file is missing, or
//! when the base locale was requested, the route falls back to
//! `{root}/{dir}/messages.po`. The fallback always uses the literal name
//! `messages`, whatever base name the translator was configured with.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::error::{L10nError, L10nResult};
use crate::{BASE_LOCALE, CATALOG_EXTENSION, FALLBACK_FILE_BASE_NAME};

/// Which candidate a route settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// The catalogue named after the requested locale.
    LocaleSpecific,
    /// The base-locale catalogue `messages.po`.
    BaseFallback,
}

/// A catalogue path that existed when the route was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    path: Utf8PathBuf,
    kind: RouteKind,
}

impl ResolvedPath {
    /// Catalogue location.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Whether the locale-specific file or the fallback was chosen.
    #[must_use]
    pub const fn kind(&self) -> RouteKind {
        self.kind
    }

    /// Consumes the route, returning the catalogue location.
    #[must_use]
    pub fn into_path(self) -> Utf8PathBuf {
        self.path
    }
}

/// Builds catalogue routes beneath one translation root.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RouteBuilder<'a> {
    base_path: &'a Utf8Path,
    file_base_name: &'a str,
}

impl<'a> RouteBuilder<'a> {
    pub(crate) const fn new(base_path: &'a Utf8Path, file_base_name: &'a str) -> Self {
        Self {
            base_path,
            file_base_name,
        }
    }

    /// Picks the catalogue backing `directory_segments` for `locale`.
    ///
    /// Locales are compared with [`BASE_LOCALE`] as plain strings, so `en-us`
    /// or `en` count as non-base and still probe for their own file.
    pub(crate) fn build(&self, directory_segments: &[&str], locale: &str) -> L10nResult<ResolvedPath> {
        let relative_dir = directory_segments.join("/");

        if locale != BASE_LOCALE {
            let candidate = self.catalog_path(&relative_dir, self.file_base_name, Some(locale));
            if candidate.is_file() {
                debug!(path = %candidate, locale, "using locale-specific catalogue");
                return Ok(ResolvedPath {
                    path: candidate,
                    kind: RouteKind::LocaleSpecific,
                });
            }
            debug!(path = %candidate, locale, "locale-specific catalogue missing; falling back");
        }

        let fallback = self.catalog_path(&relative_dir, FALLBACK_FILE_BASE_NAME, None);
        if !fallback.is_file() {
            return Err(L10nError::file_not_found(fallback));
        }
        debug!(path = %fallback, locale, "using base catalogue");
        Ok(ResolvedPath {
            path: fallback,
            kind: RouteKind::BaseFallback,
        })
    }

    fn catalog_path(&self, relative_dir: &str, file_name: &str, locale: Option<&str>) -> Utf8PathBuf {
        let base = self.base_path;
        let file = locale.map_or_else(
            || format!("{file_name}.{CATALOG_EXTENSION}"),
            |code| format!("{file_name}.{code}.{CATALOG_EXTENSION}"),
        );
        Utf8PathBuf::from(format!("{base}/{relative_dir}/{file}"))
    }
}
