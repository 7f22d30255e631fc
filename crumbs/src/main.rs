mod app;
mod browser;
mod services;
mod session;
mod settings;
mod store;
mod style;

use env_logger::Env;
use iced::{Size, window};

use crate::app::{App, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            min_size: Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }),
            exit_on_close_request: false,
            ..window::Settings::default()
        })
        .resizable(true)
        .subscription(App::subscription)
        .run()
}
