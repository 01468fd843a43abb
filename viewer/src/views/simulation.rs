use iced::widget::{button, canvas::Canvas, column, row, text, Column, Space};
use iced::{Alignment, Element, Length};
use pigcare_core::model::{palette, Forecast, SimulationZone};
use pigcare_core::screens::SimulationScreen;
use pigcare_core::{Action, TickTarget};

use crate::canvas::FarmLayout;
use crate::style;

pub fn view(screen: &SimulationScreen) -> Element<'_, Action> {
    let controls = style::card(
        row![
            column![
                text("시뮬레이션 시간").size(12).color(style::TEXT_MUTED),
                text(format!("{}시간 경과", screen.hour().value()))
                    .size(20)
                    .color(style::TEXT_STRONG),
            ]
            .spacing(2),
            Space::new().width(Length::Fill),
            button(text(screen.play_label()).size(13))
                .on_press(Action::TogglePlayback(TickTarget::SimulationHour))
                .padding([8, 14])
                .style(style::filled_button(palette::VIOLET)),
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill);

    let layout = FarmLayout::new(
        screen
            .zones()
            .iter()
            .map(|zone| (zone.clone(), screen.radius(zone)))
            .collect(),
    );
    let farm = style::card(
        column![
            text("농장 배치도").size(15).color(style::TEXT_STRONG),
            Canvas::new(layout)
                .width(Length::Fill)
                .height(Length::Fixed(240.0)),
        ]
        .spacing(8),
    )
    .width(Length::Fill);

    let zones = screen
        .zones()
        .iter()
        .fold(Column::new().spacing(8), |zones, zone| {
            zones.push(zone_card(zone, screen.radius(zone)))
        });

    let mut content = column![controls, farm].spacing(14);
    if let Some(forecast) = screen.forecast() {
        content = content.push(forecast_card(forecast));
    }
    content
        .push(super::section_title("구역별 상세"))
        .push(zones)
        .into()
}

fn forecast_card(forecast: &Forecast) -> Element<'_, Action> {
    let projections = forecast
        .projections
        .iter()
        .fold(Column::new().spacing(4), |rows, projection| {
            rows.push(row![
                text(projection.horizon.as_str()).size(13).color(style::TEXT_MUTED),
                Space::new().width(Length::Fill),
                text(projection.summary())
                    .size(13)
                    .color(style::color(projection.severity.swatch())),
            ])
        });
    let actions = forecast
        .actions
        .iter()
        .fold(Column::new().spacing(4), |rows, action| {
            rows.push(text(format!("• {action}")).size(13).color(style::TEXT_STRONG))
        });

    style::card(
        column![
            text("확산 예측").size(15).color(style::TEXT_STRONG),
            text(forecast.affected_summary.as_str())
                .size(13)
                .color(style::TEXT_MUTED),
            projections,
            text("권장 조치").size(14).color(style::TEXT_STRONG),
            actions,
        ]
        .spacing(8),
    )
    .width(Length::Fill)
    .into()
}

fn zone_card(zone: &SimulationZone, radius: u32) -> Element<'_, Action> {
    style::card(
        row![
            column![
                text(zone.name.as_str()).size(14).color(style::TEXT_STRONG),
                text(format!(
                    "감염 {}마리 / 전체 {}마리 · 확산 반경 {}m",
                    zone.infected_count, zone.animal_count, radius
                ))
                .size(12)
                .color(style::TEXT_MUTED),
            ]
            .spacing(2),
            Space::new().width(Length::Fill),
            style::badge(zone.risk.label(), zone.risk.swatch()),
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .into()
}
