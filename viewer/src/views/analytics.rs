use iced::widget::{column, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length};
use pigcare_core::model::{MetricCard, Trend, ZoneReport};
use pigcare_core::screens::AnalyticsScreen;
use pigcare_core::Action;

use crate::style;

pub fn view(screen: &AnalyticsScreen) -> Element<'_, Action> {
    let grid = screen
        .metrics()
        .chunks(2)
        .fold(Column::new().spacing(10), |grid, pair| {
            grid.push(
                pair.iter()
                    .fold(Row::new().spacing(10), |line, card| line.push(metric_card(card))),
            )
        });

    let outlook = style::card(
        column![
            text("주간 추이").size(15).color(style::TEXT_STRONG),
            text(screen.outlook()).size(13).color(style::TEXT_MUTED),
        ]
        .spacing(6),
    )
    .width(Length::Fill);

    let zones = screen
        .zone_reports()
        .iter()
        .fold(Column::new().spacing(8), |zones, report| {
            zones.push(zone_row(report))
        });

    column![
        super::section_title("농장 현황"),
        grid,
        outlook,
        super::section_title("구역별 현황"),
        zones,
    ]
    .spacing(14)
    .into()
}

fn metric_card(card: &MetricCard) -> Element<'_, Action> {
    let arrow = match card.trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
    };
    style::card(
        column![
            text(card.label.as_str()).size(12).color(style::TEXT_MUTED),
            text(card.value.as_str()).size(22).color(style::color(card.accent)),
            text(format!("{arrow} {}", card.change))
                .size(12)
                .color(style::TEXT_MUTED),
        ]
        .spacing(4),
    )
    .width(Length::Fill)
    .into()
}

fn zone_row(report: &ZoneReport) -> Element<'_, Action> {
    style::card(
        row![
            column![
                text(report.name.as_str()).size(14).color(style::TEXT_STRONG),
                text(report.details()).size(12).color(style::TEXT_MUTED),
            ]
            .spacing(2),
            Space::new().width(Length::Fill),
            style::badge(report.status.label(), report.status.swatch()),
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .into()
}
