use iced::widget::{button, canvas::Canvas, column, container, row, stack, text, Column, Space};
use iced::{Alignment, Element, Length};
use pigcare_core::model::{palette, DetectedAnimal};
use pigcare_core::screens::CctvScreen;
use pigcare_core::{Action, TickTarget};

use crate::canvas::DetectionOverlay;
use crate::images::{Gallery, ImageSlot};
use crate::style;

const FRAME_HEIGHT: f32 = 240.0;

pub fn view<'a>(screen: &'a CctvScreen, gallery: &'a Gallery) -> Element<'a, Action> {
    let camera_label = screen
        .feed()
        .map(|feed| feed.camera_label.as_str())
        .unwrap_or_default();
    let live = if screen.is_playing() { "● LIVE" } else { "❚❚ 정지" };

    let frame = stack![
        gallery.view(ImageSlot::CctvFrame, FRAME_HEIGHT),
        Canvas::new(DetectionOverlay::new(screen.detections()))
            .width(Length::Fill)
            .height(Length::Fixed(FRAME_HEIGHT)),
        container(
            row![
                text(camera_label).size(12).color(iced::Color::WHITE),
                Space::new().width(Length::Fill),
                text(format!("{live} {}", screen.current_time()))
                    .size(12)
                    .color(iced::Color::WHITE),
            ]
            .padding(8),
        )
        .width(Length::Fill),
    ];

    let play_label = if screen.is_playing() { "일시정지" } else { "재생" };
    let controls = row![
        button(text("⟲ 되감기").size(13))
            .on_press(Action::Rewind)
            .padding([8, 12])
            .style(style::outline_button(palette::GRAY)),
        button(text(play_label).size(13))
            .on_press(Action::TogglePlayback(TickTarget::CctvClock))
            .padding([8, 12])
            .style(style::filled_button(palette::BLUE)),
    ]
    .spacing(10);

    let mut content = column![frame, controls].spacing(14);
    if let Some(feed) = screen.feed() {
        content = content.push(
            style::card(
                column![
                    text("분석 요약").size(15).color(style::TEXT_STRONG),
                    summary_line("위치", feed.location.clone()),
                    summary_line("시간", feed.captured_at.clone()),
                    summary_line("감지된 개체", format!("{}마리", screen.detections().len())),
                    row![
                        text("위험도").size(13).color(style::TEXT_MUTED),
                        Space::new().width(Length::Fill),
                        style::badge(feed.risk.grade(), feed.risk.swatch()),
                    ]
                    .align_y(Alignment::Center),
                ]
                .spacing(6),
            )
            .width(Length::Fill),
        );
    }

    let detections = screen
        .detections()
        .iter()
        .fold(Column::new().spacing(8), |list, animal| {
            list.push(detection_card(animal))
        });
    content = content
        .push(super::section_title("감지된 이상 행동"))
        .push(detections);

    if let Some(feed) = screen.feed() {
        content = content.push(
            style::card(
                column![
                    text("권장 조치").size(15).color(style::TEXT_STRONG),
                    text(feed.recommendation.as_str())
                        .size(13)
                        .color(style::color(palette::RED)),
                ]
                .spacing(6),
            )
            .width(Length::Fill),
        );
    }

    content
        .push(
            row![
                button(container(text("긴급 알림 발송").size(13)).center_x(Length::Fill))
                    .on_press(Action::SendEmergencyAlert)
                    .width(Length::Fill)
                    .padding(12)
                    .style(style::filled_button(palette::RED)),
                button(container(text("자동 격리 시작").size(13)).center_x(Length::Fill))
                    .on_press(Action::StartIsolation)
                    .width(Length::Fill)
                    .padding(12)
                    .style(style::filled_button(palette::AMBER)),
            ]
            .spacing(10),
        )
        .into()
}

fn summary_line<'a>(label: &'a str, value: String) -> Element<'a, Action> {
    row![
        text(label).size(13).color(style::TEXT_MUTED),
        Space::new().width(Length::Fill),
        text(value).size(13).color(style::TEXT_STRONG),
    ]
    .into()
}

fn detection_card(animal: &DetectedAnimal) -> Element<'_, Action> {
    let swatch = animal.behavior.swatch();
    style::card(
        row![
            style::badge(animal.behavior.label(), swatch),
            text(format!("개체 #{}", animal.id))
                .size(13)
                .color(style::TEXT_STRONG),
            Space::new().width(Length::Fill),
            text(format!("신뢰도 {}%", animal.confidence_pct()))
                .size(13)
                .color(style::color(swatch)),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .into()
}
