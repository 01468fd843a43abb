use iced::widget::{button, container, text, Container};
use iced::{Border, Color, Element, Shadow, Theme, Vector};
use pigcare_core::model::Swatch;

pub const BG_PAGE: Color = Color::from_rgb(0.976, 0.98, 0.984);
pub const BG_CARD: Color = Color::WHITE;
pub const STROKE_DIM: Color = Color::from_rgb(0.898, 0.906, 0.922);
pub const TEXT_MUTED: Color = Color::from_rgb(0.42, 0.447, 0.502);
pub const TEXT_STRONG: Color = Color::from_rgb(0.067, 0.094, 0.153);

pub fn color(swatch: Swatch) -> Color {
    Color::from_rgb8(swatch.r, swatch.g, swatch.b)
}

pub fn tint(swatch: Swatch, alpha: f32) -> Color {
    Color {
        a: alpha,
        ..color(swatch)
    }
}

pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    container(content).padding(16).style(|_| container::Style {
        background: Some(BG_CARD.into()),
        border: Border {
            color: STROKE_DIM,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    })
}

/// Small rounded label in the swatch color.
pub fn badge<'a, Message: 'a>(label: &str, swatch: Swatch) -> Element<'a, Message> {
    container(text(label.to_string()).size(12).color(Color::WHITE))
        .padding([2, 8])
        .style(move |_| container::Style {
            background: Some(color(swatch).into()),
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

pub fn page(_: &Theme) -> container::Style {
    container::Style {
        background: Some(BG_PAGE.into()),
        ..Default::default()
    }
}

pub fn filled_button(swatch: Swatch) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let background = match status {
            button::Status::Disabled => tint(swatch, 0.45),
            button::Status::Hovered | button::Status::Pressed => tint(swatch, 0.85),
            button::Status::Active => color(swatch),
        };
        button::Style {
            background: Some(background.into()),
            text_color: Color::WHITE,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub fn outline_button(swatch: Swatch) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, _| button::Style {
        background: Some(BG_CARD.into()),
        text_color: color(swatch),
        border: Border {
            color: color(swatch),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn link_button(_: &Theme, _: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: TEXT_MUTED,
        ..Default::default()
    }
}

pub fn chip(active: bool, swatch: Swatch) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, _| {
        let (background, text_color) = if active {
            (color(swatch), Color::WHITE)
        } else {
            (BG_CARD, TEXT_MUTED)
        };
        button::Style {
            background: Some(background.into()),
            text_color,
            border: Border {
                color: STROKE_DIM,
                width: 1.0,
                radius: 16.0.into(),
            },
            ..Default::default()
        }
    }
}
