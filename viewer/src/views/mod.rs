use iced::widget::{
    button, center, column, container, opaque, row, scrollable, stack, text, Space,
};
use iced::{Alignment, Color, Element, Length};
use pigcare_core::model::palette;
use pigcare_core::screens::alerts::EMPTY_ALERTS;
use pigcare_core::{Action, Notice, Route, Session, Tab};

use crate::images::Gallery;
use crate::style;

mod alerts;
mod analytics;
mod cctv;
mod dashboard;
mod login;
mod settings;
mod simulation;

/// Everything on screen for the current route, with any open notice on top.
pub fn shell<'a>(session: &'a Session, gallery: &'a Gallery) -> Element<'a, Action> {
    let body: Element<'a, Action> = match session.route() {
        Route::Login => session
            .login()
            .map(|screen| login::view(screen, gallery))
            .unwrap_or_else(blank),
        Route::Tabs(tab) => tabs(session, tab),
        Route::Cctv => session
            .cctv()
            .map(|screen| detail("CCTV 영상 분석", cctv::view(screen, gallery)))
            .unwrap_or_else(blank),
        Route::Simulation => session
            .simulation()
            .map(|screen| detail("확산 시뮬레이션", simulation::view(screen)))
            .unwrap_or_else(blank),
    };

    let page = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::page);

    match session.notice() {
        Some(notice) => stack![page, notice_overlay(notice)].into(),
        None => page.into(),
    }
}

fn blank<'a>() -> Element<'a, Action> {
    Space::new().into()
}

fn tabs<'a>(session: &'a Session, tab: Tab) -> Element<'a, Action> {
    let content = match tab {
        Tab::Dashboard => session.dashboard().map(dashboard::view),
        Tab::Alerts => session.alerts().map(alerts::view),
        Tab::Analytics => session.analytics().map(analytics::view),
        Tab::Settings => session.settings().map(settings::view),
    }
    .unwrap_or_else(blank);

    column![
        scrollable(container(content).padding(16)).height(Length::Fill),
        tab_bar(tab),
    ]
    .into()
}

fn tab_bar<'a>(active: Tab) -> Element<'a, Action> {
    let buttons: Vec<Element<'a, Action>> = Tab::ALL
        .iter()
        .map(|tab| {
            let swatch = if *tab == active {
                palette::GREEN
            } else {
                palette::GRAY
            };
            button(text(tab.title()).size(13).color(style::color(swatch)))
                .on_press(Action::SelectTab(*tab))
                .width(Length::Fill)
                .padding(12)
                .style(style::link_button)
                .into()
        })
        .collect();
    style::card(row(buttons).align_y(Alignment::Center))
        .padding(0)
        .width(Length::Fill)
        .into()
}

/// Pushed screens get a back button and a title.
fn detail<'a>(title: &'a str, content: Element<'a, Action>) -> Element<'a, Action> {
    let header = row![
        button(text("←").size(18))
            .on_press(Action::Back)
            .padding([4, 10])
            .style(style::link_button),
        text(title).size(20).color(style::TEXT_STRONG),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    column![
        container(header).padding([12, 16]),
        scrollable(container(content).padding(16)).height(Length::Fill),
    ]
    .into()
}

fn notice_overlay<'a>(notice: &'a Notice) -> Element<'a, Action> {
    let dialog = style::card(
        column![
            text(notice.title.as_str()).size(18).color(style::TEXT_STRONG),
            text(notice.body.as_str()).size(14).color(style::TEXT_MUTED),
            button(text("확인"))
                .on_press(Action::DismissNotice)
                .padding([8, 24])
                .style(style::filled_button(palette::GREEN)),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .width(Length::Fixed(300.0));

    opaque(
        center(dialog).style(|_| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.4).into()),
            ..Default::default()
        }),
    )
}

/// Vertical list of cards, or the empty-state line.
pub(crate) fn list<'a>(items: Vec<Element<'a, Action>>) -> Element<'a, Action> {
    if items.is_empty() {
        return container(text(EMPTY_ALERTS).size(14).color(style::TEXT_MUTED))
            .padding(24)
            .center_x(Length::Fill)
            .into();
    }
    column(items).spacing(10).into()
}

pub(crate) fn section_title<'a>(title: &'a str) -> Element<'a, Action> {
    text(title).size(16).color(style::TEXT_STRONG).into()
}
