use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::directory::Directory;
use crate::entry::Entry;

/// Key under which the navigator snapshot is stored.
pub const STATE_KEY: &str = "state";

/// Errors emitted while encoding or decoding instance state.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot JSON is malformed")]
    Json(#[from] serde_json::Error),
}

/// View state captured across a suspend/resume boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    directory: Directory,
    #[serde(default)]
    entries: Vec<Entry>,
}

impl Snapshot {
    /// Create a snapshot from its parts.
    pub fn new(directory: Directory, entries: Vec<Entry>) -> Self {
        Self { directory, entries }
    }

    /// Return the captured directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Return the captured entries.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Consume the snapshot and return both parts.
    pub fn into_parts(self) -> (Directory, Vec<Entry>) {
        (self.directory, self.entries)
    }
}

/// Keyed record handed to the platform on suspension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceState {
    records: BTreeMap<String, serde_json::Value>,
}

impl InstanceState {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return whether a value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// Store `snapshot` under [`STATE_KEY`].
    pub fn put_snapshot(
        &mut self,
        snapshot: &Snapshot,
    ) -> Result<(), SnapshotError> {
        let value = serde_json::to_value(snapshot)?;
        self.records.insert(String::from(STATE_KEY), value);
        Ok(())
    }

    /// Read the snapshot stored under [`STATE_KEY`], if present.
    pub fn snapshot(&self) -> Result<Option<Snapshot>, SnapshotError> {
        let Some(value) = self.records.get(STATE_KEY) else {
            return Ok(None);
        };

        let snapshot = Snapshot::deserialize(value)?;
        Ok(Some(snapshot))
    }

    /// Encode the record as pretty JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a record from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }
}
