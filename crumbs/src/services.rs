use std::path::Path;
use std::process::{Command, Stdio};

use crumbs_nav::FileOpener;

#[cfg(target_os = "macos")]
const FALLBACK_TEXT_VIEWER: &str = "open -t";
#[cfg(not(target_os = "macos"))]
const FALLBACK_TEXT_VIEWER: &str = "gedit";

/// Return the text viewer named by `$VISUAL` or `$EDITOR`, else a fallback.
pub(crate) fn default_text_viewer() -> String {
    let visual = std::env::var("VISUAL").ok();
    let editor = std::env::var("EDITOR").ok();
    text_viewer_from(visual, editor)
}

fn text_viewer_from(visual: Option<String>, editor: Option<String>) -> String {
    visual
        .into_iter()
        .chain(editor)
        .find(|command| !command.trim().is_empty())
        .unwrap_or_else(|| String::from(FALLBACK_TEXT_VIEWER))
}

/// Launches files through the desktop's registered handlers.
#[derive(Debug, Clone)]
pub(crate) struct SystemOpener {
    text_viewer: String,
}

impl SystemOpener {
    pub(crate) fn new(text_viewer: impl Into<String>) -> Self {
        Self {
            text_viewer: text_viewer.into(),
        }
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new(default_text_viewer())
    }
}

impl FileOpener for SystemOpener {
    fn open_with_default(&self, path: &Path) -> bool {
        match open::that_detached(path) {
            Ok(()) => true,
            Err(err) => {
                let display = path.display();
                log::debug!("default handler failed for {display}: {err}");
                false
            },
        }
    }

    fn open_as_plain_text(&self, path: &Path) -> bool {
        let Some((program, args)) = parse_command_line(&self.text_viewer)
        else {
            return false;
        };

        let spawned = Command::new(&program)
            .args(args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                std::thread::spawn(move || {
                    if let Err(err) = child.wait() {
                        log::debug!("text viewer {program} not reaped: {err}");
                    }
                });
                true
            },
            Err(err) => {
                log::warn!("text viewer {program} failed to start: {err}");
                false
            },
        }
    }
}

fn parse_command_line(input: &str) -> Option<(String, Vec<String>)> {
    let parts = match shell_words::split(input) {
        Ok(parts) => parts,
        Err(err) => {
            log::warn!("text viewer command parse failed: {err}");
            return None;
        },
    };
    let Some((program, args)) = parts.split_first() else {
        log::warn!("text viewer command is empty");
        return None;
    };

    Some((program.clone(), args.to_vec()))
}
