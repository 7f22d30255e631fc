use std::path::PathBuf;

use thiserror::Error;

use crate::store::StoreError;

/// Errors emitted while reading or writing settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to encode settings for {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
