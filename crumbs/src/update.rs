use crumbs_nav::{Back, Click, FsLister, ListingOptions, ListingRequest};
use iced::keyboard::{self, Key, Modifiers, key};
use iced::widget::operation::snap_to_end;
use iced::{Task, window};

use super::view::BREADCRUMB_SCROLL_ID;
use crate::app::{App, AppEvent};
use crate::settings;

/// Apply `event` to the app state.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    let task = match event {
        AppEvent::EntryPressed(index) => {
            handle_click(app.navigator.entry_clicked(index))
        },
        AppEvent::CrumbPressed(index) => {
            match app.navigator.jump_to_breadcrumb(index) {
                Some(request) => run_listing(request),
                None => Task::none(),
            }
        },
        AppEvent::Back => handle_back(app),
        AppEvent::Refresh => run_listing(app.navigator.refresh()),
        AppEvent::ToggleHidden => toggle_hidden(app),
        AppEvent::ListingLoaded(response) => {
            let _ = app.navigator.complete_listing(response);
            Task::none()
        },
        AppEvent::Keyboard(event) => handle_keyboard(event),
        AppEvent::Window(id, window::Event::CloseRequested) => {
            app.persist_session();
            window::close(id)
        },
        AppEvent::Window(..) => Task::none(),
    };

    Task::batch(vec![task, scroll_breadcrumbs(app)])
}

/// List a directory off the update loop and feed the result back.
pub(super) fn run_listing(request: ListingRequest) -> Task<AppEvent> {
    Task::perform(
        async move { request.run(&FsLister) },
        AppEvent::ListingLoaded,
    )
}

/// Turn a pending breadcrumb scroll signal into a scroll operation.
pub(super) fn scroll_breadcrumbs(app: &mut App) -> Task<AppEvent> {
    let pending = app
        .navigator
        .view_mut()
        .and_then(|view| view.take_scroll());

    match pending {
        Some(_) => snap_to_end(BREADCRUMB_SCROLL_ID),
        None => Task::none(),
    }
}

fn handle_click(click: Click) -> Task<AppEvent> {
    match click {
        Click::Entered(request) => run_listing(request),
        Click::Opened(outcome) => {
            log::debug!("file open resolved as {outcome:?}");
            Task::none()
        },
        Click::Ignored => Task::none(),
    }
}

fn handle_back(app: &mut App) -> Task<AppEvent> {
    match app.navigator.go_back() {
        Back::Stay(request) => run_listing(request),
        Back::Exit => {
            app.persist_session();
            window::latest().and_then(window::close)
        },
    }
}

fn toggle_hidden(app: &mut App) -> Task<AppEvent> {
    let current = app.navigator.options();
    let options = ListingOptions {
        show_hidden: !current.show_hidden,
        ..current
    };

    app.settings.set_listing_options(options);
    if let Err(err) = settings::save_settings(&app.settings) {
        log::warn!("settings save failed: {err}");
    }

    match app.navigator.set_options(options) {
        Some(request) => run_listing(request),
        None => Task::none(),
    }
}

fn handle_keyboard(event: keyboard::Event) -> Task<AppEvent> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return Task::none();
    };

    match shortcut(&key, modifiers) {
        Some(event) => Task::done(event),
        None => Task::none(),
    }
}

fn shortcut(key: &Key, modifiers: Modifiers) -> Option<AppEvent> {
    match key.as_ref() {
        Key::Named(key::Named::Backspace) => Some(AppEvent::Back),
        Key::Named(key::Named::ArrowLeft) if modifiers.alt() => {
            Some(AppEvent::Back)
        },
        Key::Named(key::Named::F5) => Some(AppEvent::Refresh),
        Key::Character("h") if modifiers.control() => {
            Some(AppEvent::ToggleHidden)
        },
        _ => None,
    }
}
