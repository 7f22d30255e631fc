use iced::widget::{button, container, scrollable};
use iced::{Background, Theme};

/// Return a scrollbar style with square, slightly translucent rails.
pub(crate) fn thin_scroll_style(
    theme: &Theme,
    status: scrollable::Status,
) -> scrollable::Style {
    let mut style = scrollable::default(theme, status);
    let radius = iced::border::Radius::from(0.0);

    style.vertical_rail.border.radius = radius;
    style.vertical_rail.scroller.border.radius = radius;

    let mut scroller_color = match style.vertical_rail.scroller.background {
        Background::Color(color) => color,
        _ => theme.extended_palette().background.strong.color,
    };
    scroller_color.a = (scroller_color.a * 0.7).min(1.0);
    style.vertical_rail.scroller.background = Background::Color(scroller_color);

    style
}

/// Style for one breadcrumb; the current crumb is emphasised.
pub(crate) fn crumb_style(
    theme: &Theme,
    status: button::Status,
    is_current: bool,
) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = if is_current {
        palette.background.base.text
    } else {
        palette.background.strong.text
    };
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.weak.color.into())
        },
        _ => None,
    };

    button::Style {
        background,
        text_color,
        ..Default::default()
    }
}

/// Style for a listed entry row with a hover highlight.
pub(crate) fn entry_row_style(
    theme: &Theme,
    status: button::Status,
) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => {
            let mut color = palette.background.weak.color;
            color.a = 0.6;
            Some(color.into())
        },
        button::Status::Pressed => Some(palette.primary.weak.color.into()),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        ..Default::default()
    }
}

/// Style for the header bar above the list.
pub(crate) fn header_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Style for the error banner shown when a listing fails.
pub(crate) fn error_banner_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.danger.weak.color.into()),
        text_color: Some(palette.danger.weak.text),
        ..Default::default()
    }
}
