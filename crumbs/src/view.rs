use crumbs_nav::{Crumb, Entry};
use iced::widget::text::Wrapping;
use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Element, Length, alignment};

use crate::app::{App, AppEvent};
use crate::browser::BrowserView;
use crate::settings::HeaderStyle;
use crate::style;

pub(crate) const BREADCRUMB_SCROLL_ID: &str = "breadcrumb_scroll";

const HEADER_HEIGHT: f32 = 30.0;
const HEADER_PADDING_X: f32 = 8.0;
const HEADER_FONT_SIZE: f32 = 13.0;
const CRUMB_PADDING: [f32; 2] = [4.0, 6.0];
const CRUMB_SEPARATOR: &str = "\u{203a}";

const ROW_HEIGHT: f32 = 26.0;
const ROW_FONT_SIZE: f32 = 13.0;
const ROW_PADDING_X: f32 = 10.0;
const SCROLLBAR_WIDTH: f32 = 4.0;

const BANNER_HEIGHT: f32 = 28.0;
const EMPTY_FOLDER_LABEL: &str = "This folder is empty";

/// Render the browser: header, banners and the entry list.
pub(super) fn view(app: &App) -> Element<'_, AppEvent> {
    let browser = app.navigator.view();
    let state = app.navigator.state();

    let header = match app.settings.header() {
        HeaderStyle::Breadcrumbs => {
            breadcrumb_strip(state.breadcrumbs().as_slice())
        },
        HeaderStyle::Path => path_bar(browser.map(BrowserView::path_label)),
    };

    let mut content = column![header].width(Length::Fill);

    if let Some(message) = browser.and_then(BrowserView::error) {
        content = content.push(error_banner(message));
    }

    let is_empty = browser.is_some_and(BrowserView::is_folder_empty);
    let body = if is_empty {
        empty_placeholder()
    } else {
        entry_list(state.entries())
    };
    content = content.push(body);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Horizontal strip of clickable crumbs, scrolled to its end on navigation.
fn breadcrumb_strip(crumbs: &[Crumb]) -> Element<'_, AppEvent> {
    let last = crumbs.len().saturating_sub(1);
    let mut strip = row![].spacing(2).align_y(alignment::Vertical::Center);

    for (index, crumb) in crumbs.iter().enumerate() {
        if index > 0 {
            strip = strip.push(
                text(CRUMB_SEPARATOR)
                    .size(HEADER_FONT_SIZE)
                    .wrapping(Wrapping::None),
            );
        }
        strip = strip.push(crumb_button(index, crumb.label(), index == last));
    }

    let scroll = scrollable::Scrollable::with_direction(
        strip,
        scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0)
                .margin(0),
        ),
    )
    .id(BREADCRUMB_SCROLL_ID)
    .width(Length::Fill);

    header_bar(scroll.into())
}

fn crumb_button(
    index: usize,
    label: &str,
    is_current: bool,
) -> Element<'_, AppEvent> {
    let label = text(label).size(HEADER_FONT_SIZE).wrapping(Wrapping::None);

    button(label)
        .on_press(AppEvent::CrumbPressed(index))
        .padding(CRUMB_PADDING)
        .style(move |theme, status| {
            style::crumb_style(theme, status, is_current)
        })
        .into()
}

/// Single absolute path label used instead of the crumb strip.
fn path_bar(label: Option<&str>) -> Element<'_, AppEvent> {
    let label = text(label.unwrap_or_default())
        .size(HEADER_FONT_SIZE)
        .width(Length::Fill)
        .wrapping(Wrapping::None)
        .align_x(alignment::Horizontal::Left);

    header_bar(label.into())
}

fn header_bar(content: Element<'_, AppEvent>) -> Element<'_, AppEvent> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(style::header_style)
        .into()
}

fn error_banner(message: &str) -> Element<'_, AppEvent> {
    let label = text(message).size(ROW_FONT_SIZE).wrapping(Wrapping::None);

    container(label)
        .width(Length::Fill)
        .height(Length::Fixed(BANNER_HEIGHT))
        .padding([0.0, ROW_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(style::error_banner_style)
        .into()
}

fn empty_placeholder<'a>() -> Element<'a, AppEvent> {
    container(text(EMPTY_FOLDER_LABEL).size(ROW_FONT_SIZE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Scrollable list of entries; a click reports the row index.
fn entry_list(entries: &[Entry]) -> Element<'_, AppEvent> {
    let mut rows: Vec<Element<'_, AppEvent>> =
        Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        rows.push(entry_row(index, entry));
    }

    if rows.is_empty() {
        rows.push(Space::new().width(Length::Fill).into());
    }

    let list = column(rows).width(Length::Fill).spacing(0);

    scrollable::Scrollable::new(list)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(SCROLLBAR_WIDTH)
                .scroller_width(SCROLLBAR_WIDTH)
                .margin(0),
        ))
        .style(style::thin_scroll_style)
        .into()
}

fn entry_row(index: usize, entry: &Entry) -> Element<'_, AppEvent> {
    let label = text(entry_label(entry))
        .size(ROW_FONT_SIZE)
        .width(Length::Fill)
        .wrapping(Wrapping::None);

    button(label)
        .on_press(AppEvent::EntryPressed(index))
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .padding([0.0, ROW_PADDING_X])
        .style(style::entry_row_style)
        .into()
}

/// Row text: directories end with a slash, links with an arrow marker.
fn entry_label(entry: &Entry) -> String {
    let mut label = entry.name().to_string();
    if entry.is_directory() {
        label.push('/');
    }
    if entry.is_symlink() {
        label.push_str(" \u{2192}");
    }
    label
}
