//! Error type shared by every translation lookup.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type L10nResult<T> = Result<T, L10nError>;

/// Errors that can occur while constructing a [`crate::Translator`] or
/// resolving a translation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum L10nError {
    /// The translation root handed to the translator is not a directory.
    #[error("translation directory '{path}' does not exist")]
    DirectoryNotFound {
        /// Path exactly as supplied by the caller.
        path: Utf8PathBuf,
    },

    /// Neither the locale-specific catalogue nor the base catalogue exists.
    #[error("translation file '{path}' does not exist")]
    FileNotFound {
        /// Base catalogue path that was probed last.
        path: Utf8PathBuf,
    },

    /// The resolved catalogue has no entry for the requested key.
    #[error("the translation key {key} was not found")]
    KeyNotFound {
        /// Terminal segment of the key path.
        key: String,
    },

    /// The catalogue reader failed to read or parse an existing file.
    #[error("failed to read translation file '{path}': {source}")]
    Catalog {
        /// Catalogue the reader was asked to load.
        path: Utf8PathBuf,
        /// Error reported by the reader.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The translator settings file does not exist.
    #[error("translator settings file '{path}' does not exist")]
    SettingsNotFound {
        /// Settings path exactly as supplied by the caller.
        path: Utf8PathBuf,
    },

    /// Translator settings could not be parsed.
    #[error("failed to load translator settings: {0}")]
    Settings(#[from] Box<FigmentError>),
}

impl L10nError {
    pub(crate) fn directory_not_found(path: impl Into<Utf8PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    pub(crate) fn file_not_found(path: impl Into<Utf8PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub(crate) fn settings_not_found(path: impl Into<Utf8PathBuf>) -> Self {
        Self::SettingsNotFound { path: path.into() }
    }

    pub(crate) fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    pub(crate) fn catalog(
        path: impl Into<Utf8PathBuf>,
        err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Catalog {
            path: path.into(),
            source: err.into(),
        }
    }
}

impl From<FigmentError> for L10nError {
    fn from(err: FigmentError) -> Self {
        Self::Settings(Box::new(err))
    }
}
