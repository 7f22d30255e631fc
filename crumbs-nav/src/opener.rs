use std::path::Path;

/// Host context able to launch viewers for files.
pub trait FileOpener {
    /// Launch the handler registered for the file's MIME type.
    fn open_with_default(&self, path: &Path) -> bool;

    /// Launch a plain-text viewer for the file.
    fn open_as_plain_text(&self, path: &Path) -> bool;
}

/// Which strategy handled a file-open request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Default,
    PlainText,
    Unhandled,
}

/// Open `path` with the first strategy `host` accepts.
///
/// Failure of both strategies is only logged.
pub fn open_file(host: &dyn FileOpener, path: &Path) -> OpenOutcome {
    if host.open_with_default(path) {
        return OpenOutcome::Default;
    }

    if host.open_as_plain_text(path) {
        return OpenOutcome::PlainText;
    }

    let display = path.display();
    log::debug!("no viewer found to handle {display}");
    OpenOutcome::Unhandled
}
