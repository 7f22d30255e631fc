use std::path::PathBuf;

use crumbs_nav::{InstanceState, SnapshotError};
use thiserror::Error;

use crate::store::{JsonFile, StoreError};

const STATE_FILE: &str = "state.json";

/// Errors emitted while reading or writing the state file.
#[derive(Debug, Error)]
pub(crate) enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("state file {} holds an invalid record", .path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },
}

/// Read the instance state saved by the previous run, if any.
pub(crate) fn load_instance_state()
-> Result<Option<InstanceState>, SessionError> {
    load_from(&JsonFile::in_config_dir(STATE_FILE))
}

/// Persist `state` for the next run.
pub(crate) fn save_instance_state(
    state: &InstanceState,
) -> Result<(), SessionError> {
    save_to(&JsonFile::in_config_dir(STATE_FILE), state)
}

fn load_from(file: &JsonFile) -> Result<Option<InstanceState>, SessionError> {
    let Some(text) = file.read()? else {
        return Ok(None);
    };

    InstanceState::from_json(&text)
        .map(Some)
        .map_err(|source| snapshot_error(file, source))
}

fn save_to(file: &JsonFile, state: &InstanceState) -> Result<(), SessionError> {
    let payload = state
        .to_json()
        .map_err(|source| snapshot_error(file, source))?;
    file.write(&payload)?;
    Ok(())
}

fn snapshot_error(file: &JsonFile, source: SnapshotError) -> SessionError {
    SessionError::Snapshot {
        path: file.path().to_path_buf(),
        source,
    }
}
