//! Breadcrumb navigation for a list-based file browser.
//!
//! This crate is UI-agnostic. A [`Navigator`] owns the current directory,
//! the breadcrumb trail and the listed entries, and drives any
//! [`NavigatorView`] through plain method calls. Directory listings are
//! described as [`ListingRequest`] values that the host runs wherever it
//! likes (a thread, an async task, a test) and feeds back as a
//! [`ListingResponse`].
//!
//! The recommended flow:
//! 1. create a navigator and [`Navigator::register`] a view;
//! 2. run the request returned by [`Navigator::refresh`] (or by any
//!    navigation transition) with a [`DirectoryLister`];
//! 3. hand the response to [`Navigator::complete_listing`]; responses to
//!    superseded requests are discarded.
//!
//! # Quick Example
//!
//! ```no_run
//! use crumbs_nav::{
//!     Crumb, Entry, FileOpener, FsLister, ListingOptions, Navigator,
//!     NavigatorView,
//! };
//! use std::path::Path;
//!
//! struct Host;
//!
//! impl FileOpener for Host {
//!     fn open_with_default(&self, _path: &Path) -> bool {
//!         false
//!     }
//!
//!     fn open_as_plain_text(&self, _path: &Path) -> bool {
//!         false
//!     }
//! }
//!
//! struct Console {
//!     host: Host,
//! }
//!
//! impl NavigatorView for Console {
//!     fn render_entries(&mut self, entries: &[Entry]) {
//!         for entry in entries {
//!             println!("{}", entry.name());
//!         }
//!     }
//!
//!     fn render_breadcrumbs(&mut self, crumbs: &[Crumb]) {
//!         let labels: Vec<&str> = crumbs.iter().map(Crumb::label).collect();
//!         println!("{}", labels.join(" > "));
//!     }
//!
//!     fn scroll_breadcrumbs_to(&mut self, _index: usize) {}
//!
//!     fn set_folder_empty(&mut self, empty: bool) {
//!         if empty {
//!             println!("(empty)");
//!         }
//!     }
//!
//!     fn host(&self) -> &dyn FileOpener {
//!         &self.host
//!     }
//! }
//!
//! let mut navigator = Navigator::new(ListingOptions::default());
//! navigator.register(Console { host: Host });
//!
//! let request = navigator.refresh();
//! let response = request.run(&FsLister);
//! navigator.complete_listing(response);
//! ```

mod breadcrumb;
mod directory;
mod entry;
mod listing;
mod navigator;
mod opener;
mod snapshot;

pub use breadcrumb::{Breadcrumbs, Crumb};
pub use directory::{Directory, ROOT_PATH};
pub use entry::{Entry, EntryKind};
pub use listing::{
    DirectoryLister, FsLister, ListingError, ListingOptions, ListingRequest,
    ListingResponse,
};
pub use navigator::{Back, Click, Navigator, NavigatorState, NavigatorView};
pub use opener::{FileOpener, OpenOutcome, open_file};
pub use snapshot::{InstanceState, STATE_KEY, Snapshot, SnapshotError};
