//! Temporary translation trees for lookup tests.
//!
//! Each [`CatalogTree`] owns a fresh temporary directory. Catalogues are
//! written through a `cap-std` directory handle so helpers cannot escape the
//! tree, and the directory is removed when the tree is dropped.
//!
//! # Examples
//!
//! ```no_run
//! use koopa_test_helpers::catalog::CatalogTree;
//!
//! let tree = CatalogTree::new().expect("catalogue tree");
//! tree.write("menu/messages.po", &[("open", "Open")])
//!     .expect("write catalogue");
//! assert!(tree.root().join("menu/messages.po").is_file());
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tempfile::TempDir;

/// A throwaway translation root.
#[derive(Debug)]
pub struct CatalogTree {
    _temp: TempDir,
    root: Utf8PathBuf,
    dir: Dir,
}

impl CatalogTree {
    /// Creates an empty tree in a new temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or opened, or if
    /// its path is not valid UTF-8.
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create temp dir")?;
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
            .map_err(|path| anyhow!("temp dir is not valid UTF-8: {}", path.display()))?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority())
            .with_context(|| format!("open {root}"))?;
        Ok(Self {
            _temp: temp,
            root,
            dir,
        })
    }

    /// Absolute path of the tree root.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Writes a PO catalogue holding `entries` at `relative`, creating parent
    /// directories and replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn write(&self, relative: &str, entries: &[(&str, &str)]) -> Result<Utf8PathBuf> {
        self.write_raw(relative, &render_po(entries))
    }

    /// Writes `contents` verbatim at `relative`.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn write_raw(&self, relative: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = Utf8Path::new(relative);
        if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
            self.dir
                .create_dir_all(parent)
                .with_context(|| format!("create {parent}"))?;
        }
        self.dir
            .write(path, contents)
            .with_context(|| format!("write {path}"))?;
        Ok(self.root.join(path))
    }

    /// Creates the directory `relative` and its parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn mkdir(&self, relative: &str) -> Result<Utf8PathBuf> {
        self.dir
            .create_dir_all(relative)
            .with_context(|| format!("create {relative}"))?;
        Ok(self.root.join(relative))
    }
}

/// Renders `entries` as PO text, preceded by a metadata header.
#[must_use]
pub fn render_po(entries: &[(&str, &str)]) -> String {
    let mut text = String::from(
        "msgid \"\"\nmsgstr \"\"\n\"Content-Type: text/plain; charset=UTF-8\\n\"\n",
    );
    for (key, value) in entries {
        text.push_str(&format!(
            "\nmsgid \"{}\"\nmsgstr \"{}\"\n",
            escape(key),
            escape(value)
        ));
    }
    text
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}
