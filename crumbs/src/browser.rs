use crumbs_nav::{Crumb, Entry, FileOpener, ListingError, NavigatorView};

use crate::services::SystemOpener;

/// Presentation flags the navigator drives between frames.
///
/// Entries and crumbs are read straight from the navigator while drawing;
/// this type keeps only what the navigator signals and nothing else holds.
#[derive(Debug)]
pub(crate) struct BrowserView {
    opener: SystemOpener,
    folder_empty: bool,
    path_label: String,
    error: Option<String>,
    scroll_to: Option<usize>,
}

impl BrowserView {
    pub(crate) fn new(opener: SystemOpener) -> Self {
        Self {
            opener,
            folder_empty: false,
            path_label: String::new(),
            error: None,
            scroll_to: None,
        }
    }

    pub(crate) fn is_folder_empty(&self) -> bool {
        self.folder_empty
    }

    pub(crate) fn path_label(&self) -> &str {
        &self.path_label
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Take the pending breadcrumb scroll request, if any.
    pub(crate) fn take_scroll(&mut self) -> Option<usize> {
        self.scroll_to.take()
    }
}

impl NavigatorView for BrowserView {
    fn render_entries(&mut self, entries: &[Entry]) {
        log::debug!("showing {} entries", entries.len());
        self.error = None;
    }

    fn render_breadcrumbs(&mut self, crumbs: &[Crumb]) {
        log::trace!("breadcrumb trail has {} crumbs", crumbs.len());
        self.error = None;
    }

    fn scroll_breadcrumbs_to(&mut self, index: usize) {
        self.scroll_to = Some(index);
    }

    fn set_folder_empty(&mut self, empty: bool) {
        self.folder_empty = empty;
    }

    fn set_path(&mut self, label: &str) {
        self.path_label = label.to_string();
    }

    fn show_listing_error(&mut self, error: &ListingError) {
        self.error = Some(format!("{error}"));
    }

    fn host(&self) -> &dyn FileOpener {
        &self.opener
    }
}
