use super::errors::SettingsError;
use super::model::SettingsData;
use crate::store::JsonFile;

const SETTINGS_FILE: &str = "settings.json";

/// How settings were obtained at startup.
#[derive(Debug, Clone)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Settings read at startup together with how they were obtained.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    settings: SettingsData,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    fn new(settings: SettingsData, status: SettingsLoadStatus) -> Self {
        Self { settings, status }
    }

    pub(crate) fn into_parts(self) -> (SettingsData, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

pub(crate) fn load_settings() -> Result<SettingsLoad, SettingsError> {
    load_settings_from(&JsonFile::in_config_dir(SETTINGS_FILE))
}

pub(crate) fn save_settings(
    settings: &SettingsData,
) -> Result<(), SettingsError> {
    save_settings_to(&JsonFile::in_config_dir(SETTINGS_FILE), settings)
}

/// A missing or unparsable file yields defaults; only I/O failures are
/// errors.
fn load_settings_from(file: &JsonFile) -> Result<SettingsLoad, SettingsError> {
    let Some(text) = file.read()? else {
        return Ok(SettingsLoad::new(
            SettingsData::default(),
            SettingsLoadStatus::Missing,
        ));
    };

    let load = match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => SettingsLoad::new(
            SettingsData::from_json(&value),
            SettingsLoadStatus::Loaded,
        ),
        Err(err) => SettingsLoad::new(
            SettingsData::default(),
            SettingsLoadStatus::Invalid(format!(
                "{}: {err}",
                file.path().display()
            )),
        ),
    };
    Ok(load)
}

fn save_settings_to(
    file: &JsonFile,
    settings: &SettingsData,
) -> Result<(), SettingsError> {
    let payload = serde_json::to_string_pretty(settings).map_err(|source| {
        SettingsError::Encode {
            path: file.path().to_path_buf(),
            source,
        }
    })?;
    file.write(&payload)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crumbs_nav::ListingOptions;

    use super::{
        SettingsData, SettingsLoadStatus, load_settings_from, save_settings_to,
    };
    use crate::settings::errors::SettingsError;
    use crate::store::tests::test_temp_dir;
    use crate::store::{JsonFile, StoreError};

    #[test]
    fn given_hidden_files_off_when_saved_then_reload_keeps_the_choice() {
        let root = test_temp_dir("settings-hidden");
        let file = JsonFile::new(root.join("settings.json"));
        let mut settings = SettingsData::default();
        settings.set_listing_options(ListingOptions {
            show_hidden: false,
            show_symlinks: true,
        });

        save_settings_to(&file, &settings).expect("settings should save");
        let (loaded, status) = load_settings_from(&file)
            .expect("settings should load")
            .into_parts();

        assert!(matches!(status, SettingsLoadStatus::Loaded));
        assert!(!loaded.listing_options().show_hidden);
        assert_eq!(loaded, settings);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_missing_file_when_loaded_then_defaults_are_reported_missing() {
        let root = test_temp_dir("settings-missing");
        let file = JsonFile::new(root.join("settings.json"));

        let (loaded, status) = load_settings_from(&file)
            .expect("missing settings should not fail")
            .into_parts();

        assert!(matches!(status, SettingsLoadStatus::Missing));
        assert_eq!(loaded, SettingsData::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_truncated_json_when_loaded_then_status_names_the_file() {
        let root = test_temp_dir("settings-truncated");
        let file = JsonFile::new(root.join("settings.json"));
        fs::write(file.path(), "{ \"view\": ")
            .expect("truncated payload should be written");

        let (loaded, status) = load_settings_from(&file)
            .expect("invalid settings are not an I/O failure")
            .into_parts();

        assert_eq!(loaded, SettingsData::default());
        let SettingsLoadStatus::Invalid(message) = status else {
            panic!("expected invalid status, got {status:?}");
        };
        assert!(message.contains("settings.json"));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_unwritable_location_when_saved_then_error_carries_path() {
        let root = test_temp_dir("settings-unwritable");
        let blocker = root.join("config");
        fs::write(&blocker, "").expect("blocker file should be written");
        let file = JsonFile::new(blocker.join("settings.json"));

        let err = save_settings_to(&file, &SettingsData::default())
            .expect_err("saving under a file should fail");

        let SettingsError::Store(StoreError::Write { path, .. }) = &err else {
            panic!("expected a store write error, got {err:?}");
        };
        assert_eq!(path, file.path());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }
}
