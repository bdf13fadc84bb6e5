//! Translator settings loaded from TOML.
//!
//! ```toml
//! base_path = "translations"
//! file_base_name = "messages"
//! ```
//!
//! A relative `base_path` is taken relative to the directory containing the
//! settings file, so a project can ship its settings next to its catalogues.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Format, Toml};
use serde::{Deserialize, Serialize};

use crate::DEFAULT_FILE_BASE_NAME;
use crate::error::{L10nError, L10nResult};
use crate::translator::Translator;

/// Serializable description of a [`Translator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorSettings {
    /// Translation root directory.
    pub base_path: Utf8PathBuf,
    /// Base name for locale-specific catalogues.
    #[serde(default = "default_file_base_name")]
    pub file_base_name: String,
}

fn default_file_base_name() -> String {
    DEFAULT_FILE_BASE_NAME.to_owned()
}

impl TranslatorSettings {
    /// Creates settings for `base_path` with the default file base name.
    #[must_use]
    pub fn new(base_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            file_base_name: default_file_base_name(),
        }
    }

    /// Loads settings from the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`L10nError::SettingsNotFound`] when `path` is not a file and
    /// [`L10nError::Settings`] when the TOML is malformed or lacks
    /// `base_path`.
    pub fn load(path: impl AsRef<Utf8Path>) -> L10nResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(L10nError::settings_not_found(path));
        }

        let mut settings: Self = Figment::from(Toml::file(path)).extract()?;

        if settings.base_path.is_relative()
            && let Some(parent) = path.parent()
        {
            settings.base_path = parent.join(&settings.base_path);
        }
        tracing::debug!(
            settings = %path,
            base_path = %settings.base_path,
            file_base_name = %settings.file_base_name,
            "loaded translator settings"
        );
        Ok(settings)
    }

    /// Builds a PO-backed translator from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`L10nError::DirectoryNotFound`] when `base_path` is not an
    /// existing directory.
    pub fn build(&self) -> L10nResult<Translator> {
        Translator::builder(self.base_path.clone())
            .file_base_name(self.file_base_name.clone())
            .try_build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use test_helpers::jail::with_settings_jail;

    #[rstest]
    fn loads_both_fields() -> anyhow::Result<()> {
        let settings = with_settings_jail(
            "base_path = \"/srv/translations\"\nfile_base_name = \"labels\"\n",
            |path| TranslatorSettings::load(path).map_err(test_helpers::jail::to_figment_error),
        )?;
        assert_eq!(settings.base_path.as_str(), "/srv/translations");
        assert_eq!(settings.file_base_name, "labels");
        Ok(())
    }

    #[rstest]
    fn file_base_name_defaults_to_messages() -> anyhow::Result<()> {
        let settings = with_settings_jail("base_path = \"/srv/translations\"\n", |path| {
            TranslatorSettings::load(path).map_err(test_helpers::jail::to_figment_error)
        })?;
        assert_eq!(settings.file_base_name, "messages");
        Ok(())
    }

    #[rstest]
    fn relative_roots_follow_the_settings_file() -> anyhow::Result<()> {
        let (settings, dir) = with_settings_jail("base_path = \"translations\"\n", |path| {
            let dir = path.parent().map(Utf8Path::to_path_buf).unwrap_or_default();
            TranslatorSettings::load(path)
                .map(|settings| (settings, dir))
                .map_err(test_helpers::jail::to_figment_error)
        })?;
        assert_eq!(settings.base_path, dir.join("translations"));
        Ok(())
    }

    #[rstest]
    fn missing_base_path_is_a_settings_error() -> anyhow::Result<()> {
        let err = with_settings_jail("file_base_name = \"labels\"\n", |path| {
            Ok(TranslatorSettings::load(path).expect_err("base_path is required"))
        })?;
        assert!(matches!(err, L10nError::Settings(_)), "unexpected error: {err:?}");
        Ok(())
    }

    #[rstest]
    fn malformed_toml_is_a_settings_error() -> anyhow::Result<()> {
        let err = with_settings_jail("base_path = [unterminated\n", |path| {
            Ok(TranslatorSettings::load(path).expect_err("TOML is malformed"))
        })?;
        assert!(matches!(err, L10nError::Settings(_)), "unexpected error: {err:?}");
        Ok(())
    }

    #[rstest]
    fn missing_settings_file_is_not_a_missing_catalogue() {
        let err = TranslatorSettings::load("no/such/koopa.toml").expect_err("missing file");
        assert!(
            matches!(&err, L10nError::SettingsNotFound { path } if path.as_str() == "no/such/koopa.toml"),
            "unexpected error: {err:?}"
        );
    }

    #[rstest]
    fn build_validates_the_root() {
        let err = TranslatorSettings::new("no/such/root")
            .build()
            .expect_err("missing root");
        assert!(matches!(err, L10nError::DirectoryNotFound { .. }));
    }
}
