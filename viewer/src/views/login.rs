use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length};
use pigcare_core::model::palette;
use pigcare_core::screens::LoginScreen;
use pigcare_core::Action;

use crate::images::{Gallery, ImageSlot};
use crate::style;

pub fn view<'a>(screen: &'a LoginScreen, gallery: &'a Gallery) -> Element<'a, Action> {
    let visibility = if screen.shows_password() { "숨기기" } else { "보기" };
    let submit = button(container(text(screen.submit_label())).center_x(Length::Fill))
        .on_press_maybe((!screen.is_loading()).then_some(Action::SubmitLogin))
        .width(Length::Fill)
        .padding(12)
        .style(style::filled_button(palette::GREEN));

    let form = column![
        text("휴대폰 번호").size(13).color(style::TEXT_MUTED),
        text_input("010-0000-0000", screen.phone())
            .on_input(Action::PhoneChanged)
            .padding(10),
        text("비밀번호").size(13).color(style::TEXT_MUTED),
        row![
            text_input("비밀번호를 입력하세요", screen.password())
                .on_input(Action::PasswordChanged)
                .on_submit(Action::SubmitLogin)
                .secure(!screen.shows_password())
                .padding(10),
            button(text(visibility).size(13))
                .on_press(Action::TogglePasswordVisibility)
                .style(style::link_button),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
        submit,
        row![
            button(text("비밀번호 찾기").size(13))
                .on_press(Action::ForgotPassword)
                .style(style::link_button),
            Space::new().width(Length::Fill),
            button(text("회원가입").size(13))
                .on_press(Action::SignUp)
                .style(style::link_button),
        ],
    ]
    .spacing(10);

    container(
        column![
            gallery.view(ImageSlot::LoginHero, 200.0),
            text("스마트 양돈 관리").size(26).color(style::TEXT_STRONG),
            text("AI 기반 축사 모니터링 시스템").size(14).color(style::TEXT_MUTED),
            style::card(form),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .max_width(420.0),
    )
    .center_x(Length::Fill)
    .padding(24)
    .into()
}
