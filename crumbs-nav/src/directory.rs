use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Filesystem path of the root location.
pub const ROOT_PATH: &str = "/";

/// Handle to a filesystem location, compared by path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    path: PathBuf,
}

impl Directory {
    /// Create a directory reference for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Return the root location.
    pub fn root() -> Self {
        Self::new(ROOT_PATH)
    }

    /// Return the absolute file system path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return whether this location has no parent.
    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Return the enclosing directory, if any.
    pub fn parent(&self) -> Option<Directory> {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Directory::new)
    }

    /// Return the label shown for this directory in a breadcrumb.
    ///
    /// Locations without a file name (the root) use their full display form.
    pub fn display_name(&self) -> String {
        let display = self.path.display();
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .map(ToString::to_string)
            .unwrap_or_else(|| format!("{display}"))
    }

    /// Return every location from the outermost ancestor down to `self`.
    pub fn lineage(&self) -> Vec<Directory> {
        let mut lineage: Vec<Directory> = self
            .path
            .ancestors()
            .filter(|ancestor| !ancestor.as_os_str().is_empty())
            .map(Directory::new)
            .collect();
        lineage.reverse();
        lineage
    }

    /// Return the absolute path label with a trailing separator.
    ///
    /// The root is rendered as-is so it never shows a doubled separator.
    pub fn path_label(&self) -> String {
        let display = self.path.display();
        if self.is_root() {
            format!("{display}")
        } else {
            format!("{display}/")
        }
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl From<PathBuf> for Directory {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for Directory {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}
