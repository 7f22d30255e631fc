use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crumbs_nav::{
    Back, Click, Crumb, Directory, DirectoryLister, Entry, EntryKind,
    FileOpener, InstanceState, ListingError, ListingOptions, Navigator,
    NavigatorView, OpenOutcome, Snapshot,
};

#[derive(Debug, Clone, PartialEq)]
enum Signal {
    Entries(Vec<String>),
    Breadcrumbs(Vec<String>),
    ScrollTo(usize),
    Empty(bool),
    Path(String),
    Error(String),
}

#[derive(Default)]
struct RecordingHost {
    opened: RefCell<Vec<PathBuf>>,
}

impl FileOpener for RecordingHost {
    fn open_with_default(&self, _path: &Path) -> bool {
        false
    }

    fn open_as_plain_text(&self, path: &Path) -> bool {
        self.opened.borrow_mut().push(path.to_path_buf());
        true
    }
}

#[derive(Default)]
struct RecordingView {
    host: RecordingHost,
    signals: Vec<Signal>,
}

impl RecordingView {
    fn take(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }
}

impl NavigatorView for RecordingView {
    fn render_entries(&mut self, entries: &[Entry]) {
        let names = entries.iter().map(|e| e.name().to_string()).collect();
        self.signals.push(Signal::Entries(names));
    }

    fn render_breadcrumbs(&mut self, crumbs: &[Crumb]) {
        let labels = crumbs.iter().map(|c| c.label().to_string()).collect();
        self.signals.push(Signal::Breadcrumbs(labels));
    }

    fn scroll_breadcrumbs_to(&mut self, index: usize) {
        self.signals.push(Signal::ScrollTo(index));
    }

    fn set_folder_empty(&mut self, empty: bool) {
        self.signals.push(Signal::Empty(empty));
    }

    fn set_path(&mut self, label: &str) {
        self.signals.push(Signal::Path(label.to_string()));
    }

    fn show_listing_error(&mut self, error: &ListingError) {
        self.signals.push(Signal::Error(format!("{error}")));
    }

    fn host(&self) -> &dyn FileOpener {
        &self.host
    }
}

/// In-memory lister keyed by directory path.
#[derive(Default)]
struct FakeLister {
    listings: HashMap<PathBuf, Vec<Entry>>,
    calls: Cell<usize>,
}

impl FakeLister {
    fn with(mut self, dir: &str, entries: Vec<Entry>) -> Self {
        self.listings.insert(PathBuf::from(dir), entries);
        self
    }
}

impl DirectoryLister for FakeLister {
    fn list(
        &self,
        directory: &Directory,
        _options: ListingOptions,
    ) -> Result<Vec<Entry>, ListingError> {
        self.calls.set(self.calls.get() + 1);
        self.listings
            .get(directory.path())
            .cloned()
            .ok_or_else(|| ListingError::NotFound {
                path: directory.path().to_path_buf(),
            })
    }
}

fn dir(path: &str) -> Entry {
    Entry::from_path(path, EntryKind::Directory)
}

fn file(path: &str) -> Entry {
    Entry::from_path(path, EntryKind::File)
}

fn navigator() -> Navigator<RecordingView> {
    let mut navigator = Navigator::new(ListingOptions::default());
    navigator.register(RecordingView::default());
    navigator
}

fn signals(navigator: &mut Navigator<RecordingView>) -> Vec<Signal> {
    navigator
        .view_mut()
        .map(RecordingView::take)
        .unwrap_or_default()
}

fn trail(navigator: &Navigator<RecordingView>) -> Vec<Directory> {
    navigator
        .breadcrumbs()
        .as_slice()
        .iter()
        .map(|crumb| crumb.directory().clone())
        .collect()
}

#[test]
fn given_sequence_of_descents_when_entered_then_trail_tracks_each_step() {
    let mut navigator = navigator();
    let path = ["/srv", "/srv/www", "/srv/www/static", "/srv/www/static/img"];

    for (count, step) in path.iter().enumerate() {
        let _ = navigator.enter_directory(Directory::new(*step));

        assert_eq!(navigator.breadcrumbs().len(), count + 2);
        assert_eq!(
            navigator.breadcrumbs().last().directory(),
            navigator.directory()
        );
    }
}

#[test]
fn given_deep_trail_when_jumping_then_trail_is_truncated_to_index() {
    let mut navigator = navigator();
    for step in ["/a", "/a/b", "/a/b/c"] {
        let _ = navigator.enter_directory(Directory::new(step));
    }

    let request = navigator
        .jump_to_breadcrumb(1)
        .expect("index should be in range");

    assert_eq!(navigator.breadcrumbs().len(), 2);
    assert_eq!(navigator.directory(), &Directory::new("/a"));
    assert_eq!(request.directory(), &Directory::new("/a"));
}

#[test]
fn given_root_when_going_back_then_exit_is_signalled_without_mutation() {
    let mut navigator = navigator();
    let _ = signals(&mut navigator);

    assert_eq!(navigator.go_back(), Back::Exit);

    assert_eq!(navigator.directory(), &Directory::root());
    assert_eq!(trail(&navigator), vec![Directory::root()]);
    assert!(!navigator.is_loading());
    assert!(signals(&mut navigator).is_empty());
}

#[test]
fn given_nested_directory_when_going_back_then_one_crumb_is_popped() {
    let mut navigator = navigator();
    let _ = navigator.enter_directory(Directory::new("/opt"));
    let _ = navigator.enter_directory(Directory::new("/opt/tools"));
    let _ = signals(&mut navigator);

    let back = navigator.go_back();

    assert!(matches!(back, Back::Stay(_)));
    assert_eq!(navigator.directory(), &Directory::new("/opt"));
    assert_eq!(
        trail(&navigator),
        vec![Directory::root(), Directory::new("/opt")]
    );
    assert_eq!(
        signals(&mut navigator),
        vec![
            Signal::Breadcrumbs(vec![String::from("/"), String::from("opt")]),
            Signal::ScrollTo(1),
        ]
    );
}

#[test]
fn given_unsorted_listing_when_completed_then_directories_come_first() {
    let lister = FakeLister::default()
        .with("/", vec![file("/b"), dir("/A")]);
    let mut navigator = navigator();

    let response = navigator.refresh().run(&lister);
    assert!(navigator.complete_listing(response));

    let names: Vec<&str> =
        navigator.entries().iter().map(Entry::name).collect();
    assert_eq!(names, vec!["A", "b"]);
    assert!(navigator.entries()[0].is_directory());
    assert_eq!(
        signals(&mut navigator),
        vec![
            Signal::Empty(false),
            Signal::Path(String::from("/")),
            Signal::Entries(vec![String::from("A"), String::from("b")]),
        ]
    );
}

#[test]
fn given_empty_listing_when_completed_then_prior_entries_are_cleared() {
    let lister = FakeLister::default()
        .with("/", vec![dir("/tmp")])
        .with("/tmp", Vec::new());
    let mut navigator = navigator();
    let response = navigator.refresh().run(&lister);
    let _ = navigator.complete_listing(response);

    let request = navigator.enter_directory(Directory::new("/tmp"));
    let _ = signals(&mut navigator);
    assert!(navigator.complete_listing(request.run(&lister)));

    assert!(navigator.entries().is_empty());
    assert_eq!(
        signals(&mut navigator),
        vec![
            Signal::Empty(true),
            Signal::Path(String::from("/tmp/")),
            Signal::Entries(Vec::new()),
        ]
    );
}

#[test]
fn given_snapshot_when_restored_then_lister_is_not_consulted() {
    let lister = FakeLister::default();
    let mut navigator = navigator();

    let restored = navigator.restore_from_snapshot(Some(Snapshot::new(
        Directory::new("/home/user"),
        vec![file("/home/user/y"), file("/home/user/x")],
    )));

    assert!(restored);
    assert_eq!(lister.calls.get(), 0);
    assert_eq!(navigator.directory(), &Directory::new("/home/user"));
    let emitted = signals(&mut navigator);
    assert!(emitted.contains(&Signal::Empty(false)));
    assert!(emitted.contains(&Signal::Entries(vec![
        String::from("x"),
        String::from("y"),
    ])));
    assert_eq!(emitted.last(), Some(&Signal::ScrollTo(2)));
}

#[test]
fn given_snapshot_when_restored_then_trail_is_rebuilt_from_path() {
    let mut navigator = navigator();

    let _ = navigator.restore_from_snapshot(Some(Snapshot::new(
        Directory::new("/home/user"),
        Vec::new(),
    )));

    assert_eq!(
        trail(&navigator),
        vec![
            Directory::root(),
            Directory::new("/home"),
            Directory::new("/home/user"),
        ]
    );
}

#[test]
fn given_saved_instance_state_when_restored_then_view_state_round_trips() {
    let lister = FakeLister::default()
        .with("/", vec![dir("/data")])
        .with("/data", vec![file("/data/report.csv"), dir("/data/raw")]);
    let mut before = navigator();
    let request = before.enter_directory(Directory::new("/data"));
    let _ = before.complete_listing(request.run(&lister));

    let mut saved = InstanceState::new();
    before
        .save_instance_state(&mut saved)
        .expect("state should save");

    let mut restored = navigator();
    let applied = restored
        .restore_instance_state(&saved)
        .expect("state should restore");

    assert!(applied);
    assert_eq!(restored.directory(), before.directory());
    assert_eq!(restored.entries(), before.entries());
    assert_eq!(trail(&restored), trail(&before));
}

#[test]
fn given_file_click_when_handled_then_navigation_state_is_untouched() {
    let lister = FakeLister::default()
        .with("/", vec![file("/notes.txt"), dir("/etc")]);
    let mut navigator = navigator();
    let response = navigator.refresh().run(&lister);
    let _ = navigator.complete_listing(response);
    let before = trail(&navigator);

    let click = navigator.entry_clicked(1);

    assert_eq!(click, Click::Opened(OpenOutcome::PlainText));
    assert_eq!(navigator.directory(), &Directory::root());
    assert_eq!(trail(&navigator), before);
    assert!(!navigator.is_loading());
    let view = navigator.view().expect("view should be registered");
    assert_eq!(
        *view.host.opened.borrow(),
        vec![PathBuf::from("/notes.txt")]
    );
}

#[test]
fn given_directory_click_when_handled_then_directory_is_entered() {
    let lister = FakeLister::default()
        .with("/", vec![file("/notes.txt"), dir("/etc")]);
    let mut navigator = navigator();
    let response = navigator.refresh().run(&lister);
    let _ = navigator.complete_listing(response);

    let click = navigator.entry_clicked(0);

    let Click::Entered(request) = click else {
        panic!("expected directory entry, got {click:?}");
    };
    assert_eq!(request.directory(), &Directory::new("/etc"));
    assert_eq!(navigator.breadcrumbs().len(), 2);
}

#[test]
fn given_out_of_range_click_when_handled_then_it_is_ignored() {
    let mut navigator = navigator();

    assert_eq!(navigator.entry_clicked(3), Click::Ignored);
}

#[test]
fn given_current_crumb_when_jumped_to_then_trail_is_unchanged() {
    let mut navigator = navigator();
    let _ = navigator.enter_directory(Directory::new("/usr"));
    let _ = navigator.enter_directory(Directory::new("/usr/bin"));
    let before = trail(&navigator);
    let last = navigator.breadcrumbs().last_index();

    let request = navigator.jump_to_breadcrumb(last);

    assert!(request.is_some());
    assert_eq!(trail(&navigator), before);
    assert_eq!(navigator.directory(), &Directory::new("/usr/bin"));
}

#[test]
fn given_overlapping_refreshes_when_stale_completes_last_then_it_is_ignored() {
    let lister = FakeLister::default()
        .with("/", vec![dir("/slow")])
        .with("/fast", vec![file("/fast/done")]);
    let mut navigator = navigator();

    let slow = navigator.refresh();
    let fast = navigator.enter_directory(Directory::new("/fast"));

    assert!(navigator.complete_listing(fast.run(&lister)));
    assert!(!navigator.complete_listing(slow.run(&lister)));

    let names: Vec<&str> =
        navigator.entries().iter().map(Entry::name).collect();
    assert_eq!(names, vec!["done"]);
}

#[test]
fn given_failed_listing_when_completed_then_entries_survive_and_error_shows() {
    let lister = FakeLister::default().with("/", vec![dir("/gone")]);
    let mut navigator = navigator();
    let response = navigator.refresh().run(&lister);
    let _ = navigator.complete_listing(response);

    let request = navigator.enter_directory(Directory::new("/gone"));
    let _ = signals(&mut navigator);
    assert!(navigator.complete_listing(request.run(&lister)));

    assert_eq!(navigator.entries().len(), 1);
    assert_eq!(
        signals(&mut navigator),
        vec![Signal::Error(String::from("directory /gone does not exist"))]
    );
}

#[test]
fn given_failed_descent_when_sibling_clicked_then_trail_is_lineage() {
    let lister = FakeLister::default()
        .with("/", vec![dir("/a")])
        .with("/a", vec![dir("/a/b"), dir("/a/locked")]);
    let mut navigator = navigator();
    let request = navigator.enter_directory(Directory::new("/a"));
    let _ = navigator.complete_listing(request.run(&lister));

    let Click::Entered(request) = navigator.entry_clicked(1) else {
        panic!("expected /a/locked to be entered");
    };
    let path = request.directory().path().to_path_buf();
    let _ = navigator.complete_listing(
        request.into_response(Err(ListingError::PermissionDenied { path })),
    );
    assert_eq!(navigator.entries().len(), 2);

    let click = navigator.entry_clicked(0);

    assert!(matches!(click, Click::Entered(_)));
    assert_eq!(navigator.directory(), &Directory::new("/a/b"));
    assert_eq!(trail(&navigator), Directory::new("/a/b").lineage());
}

#[test]
fn given_unrelated_directory_when_entered_then_trail_is_rebuilt() {
    let mut navigator = navigator();
    let _ = navigator.enter_directory(Directory::new("/usr"));
    let _ = navigator.enter_directory(Directory::new("/usr/bin"));

    let _ = navigator.enter_directory(Directory::new("/etc/ssh"));

    let state = navigator.state();
    assert_eq!(state.directory(), &Directory::new("/etc/ssh"));
    assert_eq!(
        trail(&navigator),
        vec![
            Directory::root(),
            Directory::new("/etc"),
            Directory::new("/etc/ssh"),
        ]
    );
}
