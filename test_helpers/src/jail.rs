//! Shared helpers for running settings tests inside `figment::Jail`.

use anyhow::{Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};

/// File name used for settings written by [`with_settings_jail`].
pub const SETTINGS_FILE: &str = "koopa.toml";

/// Writes `contents` to [`SETTINGS_FILE`] inside a fresh [`figment::Jail`]
/// and runs `f` with the file's absolute path.
///
/// The jail is torn down once the closure completes, even when it fails.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up, the file cannot be written,
/// or the closure returns a [`figment::Error`].
#[expect(
    clippy::result_large_err,
    reason = "`figment::Jail::try_with` closures must return an unboxed `figment::Error`"
)]
pub fn with_settings_jail<F, T>(contents: &str, f: F) -> Result<T>
where
    F: FnOnce(&Utf8Path) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        jail.create_file(SETTINGS_FILE, contents)?;
        let dir = Utf8PathBuf::from_path_buf(jail.directory().to_path_buf())
            .map_err(|path| format!("jail dir is not valid UTF-8: {}", path.display()))?;
        output = Some(f(&dir.join(SETTINGS_FILE))?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any displayable error into a [`figment::Error`] so it can cross
/// the jail boundary.
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers hand over owned errors from `map_err`"
)]
pub fn to_figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
