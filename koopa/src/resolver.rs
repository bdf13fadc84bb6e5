//! Looks up a terminal key inside a resolved catalogue.

use tracing::debug;

use crate::error::{L10nError, L10nResult};
use crate::reader::TranslationFileReader;
use crate::route::ResolvedPath;

/// Returns the value of the first entry in `route` whose key is exactly
/// `terminal_key`.
pub(crate) fn resolve_key<R>(reader: &R, route: &ResolvedPath, terminal_key: &str) -> L10nResult<String>
where
    R: TranslationFileReader + ?Sized,
{
    let entries = reader
        .read_entries(route.path())
        .map_err(|err| L10nError::catalog(route.path(), err))?;

    let value = entries
        .into_iter()
        .find(|entry| entry.key == terminal_key)
        .map(|entry| entry.value)
        .ok_or_else(|| L10nError::key_not_found(terminal_key))?;
    debug!(path = %route.path(), key = terminal_key, "resolved translation key");
    Ok(value)
}
