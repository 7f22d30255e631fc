#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use crumbs_nav::{InstanceState, ListingResponse, Navigator};
use iced::{Element, Subscription, Task, Theme, window};

use crate::browser::BrowserView;
use crate::services::SystemOpener;
use crate::session;
use crate::settings::{self, SettingsData, SettingsLoadStatus};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 480.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    EntryPressed(usize),
    CrumbPressed(usize),
    Back,
    Refresh,
    ToggleHidden,
    ListingLoaded(ListingResponse),
    Keyboard(iced::keyboard::Event),
    Window(window::Id, window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) navigator: Navigator<BrowserView>,
    pub(crate) settings: SettingsData,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = load_settings();
        let opener = SystemOpener::new(settings.text_viewer());
        let mut navigator = Navigator::with_start(
            settings.start_directory(),
            settings.listing_options(),
        );
        navigator.register(BrowserView::new(opener));

        let mut app = App {
            navigator,
            settings,
        };

        let task = if app.restore_session() {
            Task::none()
        } else {
            update::run_listing(app.navigator.refresh())
        };
        let scroll = update::scroll_breadcrumbs(&mut app);

        (app, Task::batch(vec![task, scroll]))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        format!("crumbs - {}", self.navigator.path_label())
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Apply an event and return follow-up tasks.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent> {
        view::view(self)
    }

    /// Write the current snapshot to the state file.
    pub(crate) fn persist_session(&self) {
        let mut state = InstanceState::new();
        if let Err(err) = self.navigator.save_instance_state(&mut state) {
            log::warn!("instance state encoding failed: {err}");
            return;
        }

        match session::save_instance_state(&state) {
            Ok(()) => log::debug!("instance state saved"),
            Err(err) => log::warn!("instance state save failed: {err}"),
        }
    }

    fn restore_session(&mut self) -> bool {
        let saved = match session::load_instance_state() {
            Ok(Some(saved)) => saved,
            Ok(None) => return false,
            Err(err) => {
                log::warn!("instance state load failed: {err}");
                return false;
            },
        };

        match self.navigator.restore_instance_state(&saved) {
            Ok(restored) => restored,
            Err(err) => {
                log::warn!("instance state snapshot invalid: {err}");
                false
            },
        }
    }
}

fn load_settings() -> SettingsData {
    let load = match settings::load_settings() {
        Ok(load) => load,
        Err(err) => {
            log::warn!("settings load failed: {err}");
            return SettingsData::default();
        },
    };

    let (settings, status) = load.into_parts();
    match &status {
        SettingsLoadStatus::Invalid(message) => {
            log::warn!("settings file invalid: {message}");
        },
        SettingsLoadStatus::Missing => {
            log::debug!("settings file missing, using defaults");
        },
        SettingsLoadStatus::Loaded => {},
    }

    settings
}
