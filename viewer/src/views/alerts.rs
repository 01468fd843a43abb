use iced::widget::{button, column, row, text, Row, Space};
use iced::{Alignment, Element, Length};
use pigcare_core::analysis::AlertFilter;
use pigcare_core::model::{palette, Alert};
use pigcare_core::screens::AlertsScreen;
use pigcare_core::Action;

use crate::style;

pub fn view(screen: &AlertsScreen) -> Element<'_, Action> {
    let chips = AlertFilter::ALL.iter().fold(Row::new().spacing(8), |chips, filter| {
        let active = *filter == screen.filter();
        chips.push(
            button(text(format!("{} {}", filter.label(), screen.count(*filter))).size(13))
                .on_press(Action::SetAlertFilter(*filter))
                .padding([6, 14])
                .style(style::chip(active, palette::GREEN)),
        )
    });

    let cards = screen
        .visible()
        .into_iter()
        .map(|alert| {
            button(alert_card(alert))
                .on_press(Action::OpenAlert(alert.id.clone()))
                .padding(0)
                .style(style::link_button)
                .into()
        })
        .collect();

    column![chips, super::list(cards)].spacing(16).into()
}

/// Card shared by the alerts tab and the dashboard's recent list.
pub(crate) fn alert_card(alert: &Alert) -> Element<'_, Action> {
    let mut header = row![
        style::badge(alert.severity.label(), alert.severity.swatch()),
        text(alert.category.label()).size(12).color(style::TEXT_MUTED),
        Space::new().width(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center);
    if alert.resolved {
        header = header.push(text("✓ 해결됨").size(12).color(style::color(palette::GREEN)));
    }

    let mut footer = row![
        text(alert.timestamp.as_str()).size(12).color(style::TEXT_MUTED),
        text(alert.location.as_str()).size(12).color(style::TEXT_MUTED),
    ]
    .spacing(12);
    if let Some(count) = alert.affected_animals() {
        footer = footer.push(
            text(format!("{count}마리 관련"))
                .size(12)
                .color(style::color(palette::RED)),
        );
    }

    style::card(
        column![
            header,
            text(alert.title.as_str()).size(15).color(style::TEXT_STRONG),
            text(alert.message.as_str()).size(13).color(style::TEXT_MUTED),
            footer,
        ]
        .spacing(6),
    )
    .width(Length::Fill)
    .into()
}
