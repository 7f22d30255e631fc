use crate::breadcrumb::{Breadcrumbs, Crumb};
use crate::directory::Directory;
use crate::entry::Entry;
use crate::listing::{
    ListingError, ListingOptions, ListingRequest, ListingResponse,
};
use crate::opener::{FileOpener, OpenOutcome, open_file};
use crate::snapshot::{InstanceState, Snapshot, SnapshotError};

/// Render target driven by a [`Navigator`].
///
/// Implementations hold no navigation state of their own; every call is a
/// trigger to re-read what the navigator exposes.
pub trait NavigatorView {
    /// The entry list changed.
    fn render_entries(&mut self, entries: &[Entry]);

    /// The breadcrumb trail changed structurally.
    fn render_breadcrumbs(&mut self, crumbs: &[Crumb]);

    /// Bring the crumb at `index` into view.
    fn scroll_breadcrumbs_to(&mut self, index: usize);

    /// Toggle the empty-folder banner.
    fn set_folder_empty(&mut self, empty: bool);

    /// The absolute path label of the current directory changed.
    fn set_path(&mut self, _label: &str) {}

    /// A listing of the current directory failed.
    fn show_listing_error(&mut self, _error: &ListingError) {}

    /// Return the host used to launch viewers for files.
    fn host(&self) -> &dyn FileOpener;
}

/// Navigation state owned by a [`Navigator`].
#[derive(Debug, Clone)]
pub struct NavigatorState {
    directory: Directory,
    breadcrumbs: Breadcrumbs,
    entries: Vec<Entry>,
}

impl NavigatorState {
    fn at(directory: Directory) -> Self {
        Self {
            breadcrumbs: Breadcrumbs::for_directory(&directory),
            directory,
            entries: Vec::new(),
        }
    }

    /// Return the current directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Return the breadcrumb trail.
    pub fn breadcrumbs(&self) -> &Breadcrumbs {
        &self.breadcrumbs
    }

    /// Return the sorted entries of the current directory.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// Result of a back-navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Back {
    /// Already at the root; the caller should leave the screen.
    Exit,
    /// Moved to the parent; carries the refresh to run.
    Stay(ListingRequest),
}

/// Result of clicking an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Click {
    /// A directory was entered and must be listed.
    Entered(ListingRequest),
    /// A file was handed to the file-open resolver.
    Opened(OpenOutcome),
    /// Nothing happened.
    Ignored,
}

/// Breadcrumb navigation state machine between a lister and a view.
pub struct Navigator<V> {
    state: NavigatorState,
    options: ListingOptions,
    last_token: u64,
    pending: Option<u64>,
    view: Option<V>,
}

impl<V: NavigatorView> Navigator<V> {
    /// Create a navigator positioned at the root.
    pub fn new(options: ListingOptions) -> Self {
        Self::with_start(Directory::root(), options)
    }

    /// Create a navigator positioned at `start`.
    pub fn with_start(start: Directory, options: ListingOptions) -> Self {
        Self {
            state: NavigatorState::at(start),
            options,
            last_token: 0,
            pending: None,
            view: None,
        }
    }

    // --- View lifecycle ---

    /// Attach a view; later transitions notify it.
    pub fn register(&mut self, view: V) {
        self.view = Some(view);
    }

    /// Detach and return the current view.
    pub fn unregister(&mut self) -> Option<V> {
        self.view.take()
    }

    /// Return the attached view.
    pub fn view(&self) -> Option<&V> {
        self.view.as_ref()
    }

    /// Return mutable access to the attached view.
    pub fn view_mut(&mut self) -> Option<&mut V> {
        self.view.as_mut()
    }

    // --- Read access ---

    /// Return the full navigation state.
    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    /// Return the current directory.
    pub fn directory(&self) -> &Directory {
        self.state.directory()
    }

    /// Return the breadcrumb trail.
    pub fn breadcrumbs(&self) -> &Breadcrumbs {
        self.state.breadcrumbs()
    }

    /// Return the sorted entries of the current directory.
    pub fn entries(&self) -> &[Entry] {
        self.state.entries()
    }

    /// Return the active listing filters.
    pub fn options(&self) -> ListingOptions {
        self.options
    }

    /// Return the absolute path label of the current directory.
    pub fn path_label(&self) -> String {
        self.state.directory.path_label()
    }

    /// Return whether a listing is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    // --- Transitions ---

    /// Issue a listing of the current directory.
    ///
    /// Only the response to the most recent request is ever applied.
    pub fn refresh(&mut self) -> ListingRequest {
        self.last_token += 1;
        self.pending = Some(self.last_token);

        let directory = self.state.directory.clone();
        log::debug!("listing {directory} (token {})", self.last_token);
        ListingRequest::new(self.last_token, directory, self.options)
    }

    /// Descend into `directory`.
    ///
    /// A directory that is not a child of the current one gets its trail
    /// rebuilt from its lineage.
    pub fn enter_directory(&mut self, directory: Directory) -> ListingRequest {
        if directory.parent().as_ref() == Some(&self.state.directory) {
            self.state.breadcrumbs.push(directory.clone());
        } else {
            self.state.breadcrumbs = Breadcrumbs::for_directory(&directory);
        }
        self.state.directory = directory;

        let request = self.refresh();
        self.notify_breadcrumbs();
        request
    }

    /// Jump to the crumb at `index`, dropping every crumb after it.
    ///
    /// Returns `None` without any change when `index` is out of range.
    pub fn jump_to_breadcrumb(
        &mut self,
        index: usize,
    ) -> Option<ListingRequest> {
        let Some(crumb) = self.state.breadcrumbs.truncate_to(index) else {
            log::debug!("breadcrumb index {index} is out of range");
            return None;
        };

        self.state.directory = crumb.directory().clone();
        Some(self.refresh())
    }

    /// Move to the parent directory.
    pub fn go_back(&mut self) -> Back {
        let Some(parent) = self.state.directory.parent() else {
            return Back::Exit;
        };

        self.state.directory = parent;
        self.state.breadcrumbs.pop();

        let request = self.refresh();
        self.notify_breadcrumbs();
        Back::Stay(request)
    }

    /// React to a click on a listed entry.
    pub fn file_or_folder_clicked(&mut self, entry: &Entry) -> Click {
        if let Some(directory) = entry.as_directory() {
            return Click::Entered(self.enter_directory(directory));
        }

        let Some(view) = self.view.as_ref() else {
            let display = entry.path().display();
            log::debug!("no view registered to open {display}");
            return Click::Ignored;
        };

        Click::Opened(open_file(view.host(), entry.path()))
    }

    /// React to a click on the entry at `index` of the sorted list.
    pub fn entry_clicked(&mut self, index: usize) -> Click {
        let Some(entry) = self.state.entries.get(index).cloned() else {
            return Click::Ignored;
        };

        self.file_or_folder_clicked(&entry)
    }

    /// Replace the listing filters, refreshing when they changed.
    pub fn set_options(
        &mut self,
        options: ListingOptions,
    ) -> Option<ListingRequest> {
        if self.options == options {
            return None;
        }

        self.options = options;
        Some(self.refresh())
    }

    /// Apply the outcome of a listing.
    ///
    /// Returns `false` when the response was superseded by a newer request
    /// or no view is attached to show it.
    pub fn complete_listing(&mut self, response: ListingResponse) -> bool {
        if self.pending != Some(response.token()) {
            let directory = response.directory();
            log::debug!(
                "dropping stale listing of {directory} (token {})",
                response.token()
            );
            return false;
        }
        self.pending = None;

        let Some(view) = self.view.as_mut() else {
            return false;
        };

        match response.into_result() {
            Ok(mut entries) => {
                if entries.is_empty() {
                    self.state.entries.clear();
                    view.set_folder_empty(true);
                } else {
                    entries.sort();
                    self.state.entries = entries;
                    view.set_folder_empty(false);
                }
                view.set_path(&self.state.directory.path_label());
                view.render_entries(&self.state.entries);
            },
            Err(err) => {
                log::warn!("listing {} failed: {err}", self.state.directory);
                view.show_listing_error(&err);
            },
        }

        true
    }

    // --- Snapshot ---

    /// Capture the current directory and entries.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.state.directory.clone(), self.state.entries.clone())
    }

    /// Store the snapshot in `out`.
    pub fn save_instance_state(
        &self,
        out: &mut InstanceState,
    ) -> Result<(), SnapshotError> {
        out.put_snapshot(&self.snapshot())
    }

    /// Restore state captured by [`Navigator::snapshot`].
    ///
    /// The trail is rebuilt from the directory lineage and the lister is not
    /// consulted. Returns `false` when there was nothing to restore.
    pub fn restore_from_snapshot(
        &mut self,
        snapshot: Option<Snapshot>,
    ) -> bool {
        let Some(snapshot) = snapshot else {
            return false;
        };

        let (directory, mut entries) = snapshot.into_parts();
        entries.sort();
        self.state = NavigatorState {
            breadcrumbs: Breadcrumbs::for_directory(&directory),
            directory,
            entries,
        };
        self.pending = None;

        if let Some(view) = self.view.as_mut() {
            if self.state.entries.is_empty() {
                view.set_folder_empty(true);
            } else {
                view.render_entries(&self.state.entries);
                view.set_folder_empty(false);
            }
            view.set_path(&self.state.directory.path_label());
        }
        self.notify_breadcrumbs();

        true
    }

    /// Restore from the snapshot stored in `saved`, if any.
    pub fn restore_instance_state(
        &mut self,
        saved: &InstanceState,
    ) -> Result<bool, SnapshotError> {
        let snapshot = saved.snapshot()?;
        Ok(self.restore_from_snapshot(snapshot))
    }

    fn notify_breadcrumbs(&mut self) {
        let Some(view) = self.view.as_mut() else {
            return;
        };

        let crumbs = self.state.breadcrumbs.as_slice();
        view.render_breadcrumbs(crumbs);
        view.scroll_breadcrumbs_to(self.state.breadcrumbs.last_index());
    }
}
