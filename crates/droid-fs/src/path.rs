//! Project-relative path handling.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A path stored with forward slashes.
///
/// Target paths in `droidpatch.toml` are written with `/` on every
/// platform. They are joined onto the project root in this form and only
/// turned into a native [`PathBuf`] when a file is opened.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: path.as_ref().to_string_lossy().replace('\\', "/"),
        }
    }

    /// Resolve `path` to an absolute, symlink-free project root.
    ///
    /// `dunce` keeps Windows results as drive paths instead of `\\?\` UNC.
    pub fn canonicalize(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        dunce::canonicalize(path)
            .map(Self::new)
            .map_err(|e| Error::io(path, e))
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append a relative segment such as `android/app/build.gradle`.
    ///
    /// An empty or `.` segment yields the path unchanged.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let inner = match (self.inner.as_str(), segment.as_str()) {
            (_, "" | ".") => self.inner.clone(),
            ("", _) => segment,
            (base, _) if base.ends_with('/') => format!("{base}{segment}"),
            (base, _) => format!("{base}/{segment}"),
        };
        Self { inner }
    }

    /// Last path component, ignoring a trailing slash.
    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Extension used to pick a config format. Dotfiles have none.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}
