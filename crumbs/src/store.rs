//! JSON files under the per-user config directory.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

const APP_DIR: &str = "crumbs";

/// Errors raised while touching a config file.
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One JSON document on disk, replaced atomically on every write.
#[derive(Debug, Clone)]
pub(crate) struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate `file_name` in `$HOME/.config/crumbs`, or the temp dir
    /// when `HOME` is unset.
    pub(crate) fn in_config_dir(file_name: &str) -> Self {
        let dir = match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".config").join(APP_DIR),
            None => std::env::temp_dir().join(APP_DIR),
        };
        Self::new(dir.join(file_name))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Return the file contents, or `None` when it does not exist yet.
    pub(crate) fn read(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Replace the file with `payload` through a sibling temp file.
    pub(crate) fn write(&self, payload: &str) -> Result<(), StoreError> {
        write_atomic(&self.path, &self.tmp_path(), payload).map_err(|source| {
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

fn write_atomic(
    path: &Path,
    tmp_path: &Path,
    payload: &str,
) -> Result<(), std::io::Error> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    fs::write(tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
