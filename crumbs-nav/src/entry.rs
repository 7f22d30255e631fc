use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::directory::Directory;

/// Kind of a listed file system entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Directory,
    File,
}

/// File system entry listed for the current directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    name: String,
    path: PathBuf,
    kind: EntryKind,
    #[serde(default)]
    symlink: bool,
}

impl Entry {
    /// Create an entry from its parts.
    pub fn new(
        name: impl Into<String>,
        path: PathBuf,
        kind: EntryKind,
    ) -> Self {
        Self {
            name: name.into(),
            path,
            kind,
            symlink: false,
        }
    }

    /// Create an entry whose name is the final component of `path`.
    pub fn from_path(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(name, path, kind)
    }

    /// Mark whether the entry is reached through a symbolic link.
    pub fn with_symlink(mut self, symlink: bool) -> Self {
        self.symlink = symlink;
        self
    }

    /// Return display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return absolute file system path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return entry kind.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Return whether the entry can be entered.
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Return whether the entry is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        self.symlink
    }

    /// Return whether the entry is hidden by dot-file convention.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Return the directory reference for a directory entry.
    pub fn as_directory(&self) -> Option<Directory> {
        self.is_directory().then(|| Directory::new(&self.path))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        match (!self.is_directory()).cmp(&(!other.is_directory())) {
            Ordering::Equal => match compare_names(self.name(), other.name()) {
                Ordering::Equal => self.path.cmp(&other.path),
                order => order,
            },
            order => order,
        }
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Case-insensitive comparison with case-sensitive tiebreak.
fn compare_names(left: &str, right: &str) -> Ordering {
    let left_fold = left.chars().flat_map(char::to_lowercase);
    let right_fold = right.chars().flat_map(char::to_lowercase);
    match left_fold.cmp(right_fold) {
        Ordering::Equal => left.cmp(right),
        order => order,
    }
}
