mod errors;
mod model;
mod storage;

pub(crate) use model::{HeaderStyle, SettingsData};
pub(crate) use storage::{SettingsLoadStatus, load_settings, save_settings};
