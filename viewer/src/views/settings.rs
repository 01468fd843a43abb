use iced::widget::{button, column, row, text, toggler, Column, Space};
use iced::{Alignment, Element, Length};
use pigcare_core::model::palette;
use pigcare_core::screens::settings::APP_VERSION;
use pigcare_core::screens::{Preference, SettingsScreen};
use pigcare_core::Action;

use crate::style;

pub fn view(screen: &SettingsScreen) -> Element<'_, Action> {
    let profile = screen.profile().map(|profile| {
        style::card(
            column![
                text(profile.name.as_str()).size(18).color(style::TEXT_STRONG),
                text(profile.role.as_str()).size(13).color(style::TEXT_MUTED),
            ]
            .spacing(4),
        )
        .width(Length::Fill)
    });

    let preferences = screen.preferences();
    let toggles = Preference::ALL
        .iter()
        .fold(Column::new().spacing(12), |toggles, preference| {
            let preference = *preference;
            toggles.push(
                row![
                    text(preference.label()).size(14).color(style::TEXT_STRONG),
                    Space::new().width(Length::Fill),
                    toggler(preferences.get(preference))
                        .on_toggle(move |enabled| Action::SetPreference(preference, enabled)),
                ]
                .align_y(Alignment::Center),
            )
        });

    let menu = ["도움말", "개인정보 처리방침"]
        .into_iter()
        .fold(Column::new().spacing(12), |menu, label| {
            menu.push(
                row![
                    text(label).size(14).color(style::TEXT_STRONG),
                    Space::new().width(Length::Fill),
                    text("›").size(14).color(style::TEXT_MUTED),
                ]
                .align_y(Alignment::Center),
            )
        });

    let mut content = Column::new().spacing(14);
    if let Some(profile) = profile {
        content = content.push(profile);
    }
    content
        .push(super::section_title("알림 설정"))
        .push(style::card(toggles).width(Length::Fill))
        .push(style::card(menu).width(Length::Fill))
        // logout is not wired to anything
        .push(
            button(text("로그아웃").size(14))
                .width(Length::Fill)
                .padding(12)
                .style(style::outline_button(palette::RED)),
        )
        .push(
            text(format!("버전 {APP_VERSION}"))
                .size(12)
                .color(style::TEXT_MUTED),
        )
        .into()
}
