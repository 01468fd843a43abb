use iced::widget::{button, column, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length};
use pigcare_core::model::{palette, Forecast};
use pigcare_core::screens::DashboardScreen;
use pigcare_core::Action;

use super::alerts::alert_card;
use crate::style;

pub fn view(screen: &DashboardScreen) -> Element<'_, Action> {
    let updated = screen
        .reading()
        .map(|reading| reading.updated_at.as_str())
        .unwrap_or("--:--:--");
    let refresh_label = if screen.is_refreshing() { "새로고침 중..." } else { "↻ 새로고침" };
    let header = row![
        column![
            text(screen.farm_name()).size(22).color(style::TEXT_STRONG),
            text(format!("마지막 업데이트: {updated}"))
                .size(12)
                .color(style::TEXT_MUTED),
        ]
        .spacing(2),
        Space::new().width(Length::Fill),
        button(text(refresh_label).size(13))
            .on_press_maybe((!screen.is_refreshing()).then_some(Action::Refresh))
            .padding([6, 12])
            .style(style::outline_button(palette::GREEN)),
    ]
    .align_y(Alignment::Center);

    let status = screen.status();
    let status_card = style::card(
        row![
            style::badge(status.label(), status.swatch()),
            text(status.description()).size(13).color(style::TEXT_MUTED),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill);

    let sensors = match screen.reading() {
        Some(reading) => row![
            sensor_card("온도", format!("{:.1}°C", reading.temperature_c)),
            sensor_card("습도", format!("{}%", reading.humidity_pct)),
            sensor_card("공기질", reading.air_quality.to_string()),
        ]
        .spacing(10),
        None => Row::new(),
    };

    let recent: Vec<Element<'_, Action>> =
        screen.recent_alerts().iter().map(alert_card).collect();
    let alerts_section = column![
        row![
            super::section_title("최근 알림"),
            Space::new().width(Length::Fill),
            button(text("전체보기").size(13))
                .on_press(Action::ViewAllAlerts)
                .style(style::link_button),
        ]
        .align_y(Alignment::Center),
        super::list(recent),
    ]
    .spacing(8);

    let disinfection = style::card(
        column![
            row![
                text("자동 소독").size(15).color(style::TEXT_STRONG),
                Space::new().width(Length::Fill),
                style::badge(
                    screen.disinfection_label(),
                    if screen.is_disinfecting() {
                        palette::BLUE
                    } else {
                        palette::GRAY
                    },
                ),
            ]
            .align_y(Alignment::Center),
            text(format!("마지막 소독: {}", screen.last_disinfection()))
                .size(12)
                .color(style::TEXT_MUTED),
            button(text("수동 소독 시작").size(13))
                .on_press_maybe((!screen.is_disinfecting()).then_some(Action::StartDisinfection))
                .padding([8, 14])
                .style(style::filled_button(palette::BLUE)),
        ]
        .spacing(8),
    )
    .width(Length::Fill);

    let mut content =
        column![header, status_card, sensors, alerts_section, disinfection].spacing(16);
    if let Some(forecast) = screen.forecast() {
        content = content.push(prediction_card(forecast));
    }
    content.into()
}

fn sensor_card<'a>(label: &'a str, value: String) -> Element<'a, Action> {
    style::card(
        column![
            text(label).size(12).color(style::TEXT_MUTED),
            text(value).size(20).color(style::TEXT_STRONG),
        ]
        .spacing(4),
    )
    .width(Length::Fill)
    .into()
}

fn prediction_card(forecast: &Forecast) -> Element<'_, Action> {
    let projections = forecast.projections.iter().fold(
        Column::new().spacing(4),
        |rows, projection| {
            rows.push(
                row![
                    text(projection.horizon.as_str()).size(13).color(style::TEXT_MUTED),
                    Space::new().width(Length::Fill),
                    text(projection.summary())
                        .size(13)
                        .color(style::color(projection.severity.swatch())),
                ]
                .align_y(Alignment::Center),
            )
        },
    );

    style::card(
        column![
            text("AI 질병 확산 예측").size(15).color(style::TEXT_STRONG),
            text(forecast.risk_summary.as_str()).size(13).color(style::color(palette::VIOLET)),
            projections,
            button(text("상세 시뮬레이션 보기").size(13))
                .on_press(Action::OpenSimulation)
                .padding([8, 14])
                .style(style::filled_button(palette::VIOLET)),
        ]
        .spacing(8),
    )
    .width(Length::Fill)
    .into()
}
