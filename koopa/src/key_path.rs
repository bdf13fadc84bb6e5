//! Splitting dotted key paths into directory segments and a lookup key.

use std::fmt;

/// A dotted translation key such as `first_level.mockedTestId`.
///
/// Every segment but the last names a directory beneath the translation root;
/// the last segment is the message identifier looked up inside the catalogue.
///
/// # Examples
///
/// ```rust
/// use koopa::KeyPath;
///
/// let key = KeyPath::parse("errors.network.timeout");
/// assert_eq!(key.directory_segments(), ["errors", "network"]);
/// assert_eq!(key.terminal_key(), "timeout");
/// assert_eq!(key.relative_dir(), "errors/network");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath<'a> {
    directory_segments: Vec<&'a str>,
    terminal_key: &'a str,
}

impl<'a> KeyPath<'a> {
    /// Splits `raw` on `.`.
    ///
    /// A key without a dot has no directory segments. Empty segments are kept
    /// as they are, so `a..b` maps onto the directory `a/`.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        match raw.rsplit_once('.') {
            Some((directories, terminal_key)) => Self {
                directory_segments: directories.split('.').collect(),
                terminal_key,
            },
            None => Self {
                directory_segments: Vec::new(),
                terminal_key: raw,
            },
        }
    }

    /// Leading segments, in order.
    #[must_use]
    pub fn directory_segments(&self) -> &[&'a str] {
        &self.directory_segments
    }

    /// Final segment, the identifier looked up inside the catalogue.
    #[must_use]
    pub const fn terminal_key(&self) -> &'a str {
        self.terminal_key
    }

    /// Directory segments joined with `/`; empty when there are none.
    #[must_use]
    pub fn relative_dir(&self) -> String {
        self.directory_segments.join("/")
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.directory_segments {
            write!(f, "{segment}.")?;
        }
        f.write_str(self.terminal_key)
    }
}
