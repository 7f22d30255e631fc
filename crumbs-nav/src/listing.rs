use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::directory::Directory;
use crate::entry::{Entry, EntryKind};

/// Filters applied when listing a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingOptions {
    pub show_hidden: bool,
    pub show_symlinks: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            show_hidden: true,
            show_symlinks: true,
        }
    }
}

/// Errors reported by a directory lister.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("directory {} does not exist", .path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied reading {}", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
    #[error("failed to list {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

impl ListingError {
    /// Classify an I/O failure raised while listing `path`.
    pub fn from_io(path: &Path, err: &io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io {
                path,
                message: format!("{err}"),
            },
        }
    }

    /// Return the path the failed listing targeted.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::NotADirectory { path }
            | Self::Io { path, .. } => path,
        }
    }
}

/// Source of directory contents.
pub trait DirectoryLister {
    /// List the direct children of `directory`, unordered.
    fn list(
        &self,
        directory: &Directory,
        options: ListingOptions,
    ) -> Result<Vec<Entry>, ListingError>;
}

/// Lister backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(
        &self,
        directory: &Directory,
        options: ListingOptions,
    ) -> Result<Vec<Entry>, ListingError> {
        read_dir_entries(directory.path(), options)
    }
}

fn read_dir_entries(
    path: &Path,
    options: ListingOptions,
) -> Result<Vec<Entry>, ListingError> {
    let metadata =
        fs::metadata(path).map_err(|err| ListingError::from_io(path, &err))?;
    if !metadata.is_dir() {
        return Err(ListingError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let reader =
        fs::read_dir(path).map_err(|err| ListingError::from_io(path, &err))?;

    let mut entries = Vec::new();
    for entry in reader {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("listing failed to read entry: {err}");
                continue;
            },
        };

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                log::warn!("listing failed to read entry type: {err}");
                continue;
            },
        };

        let name = entry.file_name().to_string_lossy().to_string();
        if !options.show_hidden && name.starts_with('.') {
            continue;
        }

        let symlink = file_type.is_symlink();
        if symlink && !options.show_symlinks {
            continue;
        }

        let entry_path = entry.path();
        let is_dir = if symlink {
            fs::metadata(&entry_path)
                .map(|target| target.is_dir())
                .unwrap_or(false)
        } else {
            file_type.is_dir()
        };
        let kind = if is_dir {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        entries.push(Entry::new(name, entry_path, kind).with_symlink(symlink));
    }

    Ok(entries)
}

/// A single listing of one directory, tagged with the token that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    token: u64,
    directory: Directory,
    options: ListingOptions,
}

impl ListingRequest {
    pub(crate) fn new(
        token: u64,
        directory: Directory,
        options: ListingOptions,
    ) -> Self {
        Self {
            token,
            directory,
            options,
        }
    }

    /// Return the issuing token.
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Return the directory to list.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Return the listing filters.
    pub fn options(&self) -> ListingOptions {
        self.options
    }

    /// Execute the request against `lister`.
    ///
    /// Exactly one outcome is produced per request.
    pub fn run<L>(self, lister: &L) -> ListingResponse
    where
        L: DirectoryLister + ?Sized,
    {
        let result = lister.list(&self.directory, self.options);
        self.into_response(result)
    }

    /// Pair the request with an outcome produced elsewhere.
    pub fn into_response(
        self,
        result: Result<Vec<Entry>, ListingError>,
    ) -> ListingResponse {
        ListingResponse {
            token: self.token,
            directory: self.directory,
            result,
        }
    }
}

/// Outcome of a [`ListingRequest`].
#[derive(Debug, Clone)]
pub struct ListingResponse {
    token: u64,
    directory: Directory,
    result: Result<Vec<Entry>, ListingError>,
}

impl ListingResponse {
    /// Return the token of the request this answers.
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Return the listed directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Return the listing result.
    pub fn result(&self) -> &Result<Vec<Entry>, ListingError> {
        &self.result
    }

    pub(crate) fn into_result(self) -> Result<Vec<Entry>, ListingError> {
        self.result
    }
}
