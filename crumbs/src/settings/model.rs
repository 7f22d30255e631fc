use std::path::PathBuf;

use crumbs_nav::{Directory, ListingOptions};
use serde::Serialize;

use crate::services::default_text_viewer;

/// Typed settings payload used for persistence and UI state.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub(crate) struct SettingsData {
    listing: ListingSettingsData,
    view: ViewSettingsData,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_directory: Option<PathBuf>,
}

/// Listing filter settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ListingSettingsData {
    show_hidden: bool,
    show_symlinks: bool,
}

impl Default for ListingSettingsData {
    fn default() -> Self {
        let options = ListingOptions::default();
        Self {
            show_hidden: options.show_hidden,
            show_symlinks: options.show_symlinks,
        }
    }
}

/// Which header the browser shows above the entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum HeaderStyle {
    #[default]
    Breadcrumbs,
    Path,
}

impl HeaderStyle {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "breadcrumbs" => Some(Self::Breadcrumbs),
            "path" => Some(Self::Path),
            _ => None,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ViewSettingsData {
    header: HeaderStyle,
    text_viewer: String,
}

impl Default for ViewSettingsData {
    fn default() -> Self {
        Self {
            header: HeaderStyle::default(),
            text_viewer: default_text_viewer(),
        }
    }
}

impl SettingsData {
    /// Return the listing filters to start with.
    pub(crate) fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            show_hidden: self.listing.show_hidden,
            show_symlinks: self.listing.show_symlinks,
        }
    }

    /// Store the listing filters currently in effect.
    pub(crate) fn set_listing_options(&mut self, options: ListingOptions) {
        self.listing.show_hidden = options.show_hidden;
        self.listing.show_symlinks = options.show_symlinks;
    }

    /// Return the header presentation.
    pub(crate) fn header(&self) -> HeaderStyle {
        self.view.header
    }

    /// Return the plain-text viewer command line.
    pub(crate) fn text_viewer(&self) -> &str {
        &self.view.text_viewer
    }

    /// Return the directory to open when nothing was restored.
    pub(crate) fn start_directory(&self) -> Directory {
        match &self.start_directory {
            Some(path) => Directory::new(path.clone()),
            None => Directory::root(),
        }
    }

    /// Build settings from JSON, falling back to defaults per field.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut settings = SettingsData::default();

        if let Some(listing) = value.get("listing") {
            if let Some(show_hidden) = read_bool_field(listing, "show_hidden")
            {
                settings.listing.show_hidden = show_hidden;
            }

            if let Some(show_symlinks) =
                read_bool_field(listing, "show_symlinks")
            {
                settings.listing.show_symlinks = show_symlinks;
            }
        }

        if let Some(view) = value.get("view") {
            if let Some(header) = read_string_field(view, "header")
                .as_deref()
                .and_then(HeaderStyle::parse)
            {
                settings.view.header = header;
            }

            if let Some(viewer) = read_string_field(view, "text_viewer")
                .filter(|value| is_non_empty(value))
            {
                settings.view.text_viewer = viewer;
            }
        }

        settings.start_directory = read_string_field(value, "start_directory")
            .map(PathBuf::from)
            .filter(|path| path.is_absolute());

        settings
    }
}

fn read_string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(ToString::to_string)
}

fn read_bool_field(value: &serde_json::Value, key: &str) -> Option<bool> {
    value.get(key).and_then(serde_json::Value::as_bool)
}

fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}
