use pigcare_core::analysis::AlertFilter;
use pigcare_core::model::{Alert, Forecast, Trend};
use pigcare_core::screens::alerts::EMPTY_ALERTS;
use pigcare_core::screens::settings::APP_VERSION;
use pigcare_core::screens::{
    AlertsScreen, AnalyticsScreen, CctvScreen, DashboardScreen, LoginScreen, Preference,
    SettingsScreen, SimulationScreen,
};
use pigcare_core::{Route, Session, Tab};

/// Plain-text frame of whatever route is on top of the session.
pub fn render(session: &Session) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", heading(session.route()))];
    match session.route() {
        Route::Login => lines.extend(session.login().map(login).unwrap_or_default()),
        Route::Tabs(tab) => {
            let body = match tab {
                Tab::Dashboard => session.dashboard().map(dashboard),
                Tab::Alerts => session.alerts().map(alerts),
                Tab::Analytics => session.analytics().map(analytics),
                Tab::Settings => session.settings().map(settings),
            };
            lines.extend(body.unwrap_or_default());
            lines.push(tab_bar(tab));
        }
        Route::Cctv => lines.extend(session.cctv().map(cctv).unwrap_or_default()),
        Route::Simulation => lines.extend(session.simulation().map(simulation).unwrap_or_default()),
    }
    if let Some(notice) = session.notice() {
        lines.push(format!("[{}] {}", notice.title, notice.body));
    }
    lines
}

fn heading(route: Route) -> &'static str {
    match route {
        Route::Login => "로그인",
        Route::Tabs(tab) => tab.title(),
        Route::Cctv => "CCTV 영상 분석",
        Route::Simulation => "확산 시뮬레이션",
    }
}

fn tab_bar(active: Tab) -> String {
    let labels: Vec<String> = Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.title())
            } else {
                tab.title().to_string()
            }
        })
        .collect();
    labels.join(" | ")
}

fn alert_line(alert: &Alert) -> String {
    let mut line = format!(
        "({}) {} - {} / {} / {}",
        alert.severity.label(),
        alert.title,
        alert.message,
        alert.location,
        alert.timestamp
    );
    if let Some(count) = alert.affected_animals() {
        line.push_str(&format!(" / {count}마리"));
    }
    if alert.resolved {
        line.push_str(" [해결됨]");
    }
    line
}

fn forecast_lines(forecast: &Forecast) -> Vec<String> {
    let mut lines = vec![
        format!("위험 요약: {}", forecast.risk_summary),
        format!("영향 범위: {}", forecast.affected_summary),
    ];
    lines.extend(
        forecast
            .projections
            .iter()
            .map(|p| format!("  {}: {}", p.horizon, p.summary())),
    );
    lines
}

fn login(screen: &LoginScreen) -> Vec<String> {
    let password = if screen.shows_password() {
        screen.password().to_string()
    } else {
        "•".repeat(screen.password().chars().count())
    };
    vec![
        "스마트 양돈 관리".to_string(),
        format!("휴대폰 번호: {}", screen.phone()),
        format!("비밀번호: {password}"),
        format!("<{}>", screen.submit_label()),
    ]
}

fn dashboard(screen: &DashboardScreen) -> Vec<String> {
    let status = screen.status();
    let mut lines = vec![
        format!("{} - {} ({})", screen.farm_name(), status.label(), status.description()),
    ];
    if let Some(reading) = screen.reading() {
        lines.push(format!(
            "온도 {:.1}°C | 습도 {}% | 공기질 {} | 업데이트 {}",
            reading.temperature_c, reading.humidity_pct, reading.air_quality, reading.updated_at
        ));
    }
    if screen.is_refreshing() {
        lines.push("새로고침 중...".to_string());
    }
    lines.push(format!(
        "소독: {} (마지막 {})",
        screen.disinfection_label(),
        screen.last_disinfection()
    ));
    lines.push("최근 알림".to_string());
    if screen.recent_alerts().is_empty() {
        lines.push(format!("  {EMPTY_ALERTS}"));
    }
    lines.extend(
        screen
            .recent_alerts()
            .iter()
            .map(|alert| format!("  {}", alert_line(alert))),
    );
    if let Some(forecast) = screen.forecast() {
        lines.extend(forecast_lines(forecast));
    }
    lines
}

fn alerts(screen: &AlertsScreen) -> Vec<String> {
    let chips: Vec<String> = AlertFilter::ALL
        .iter()
        .map(|filter| {
            let chip = format!("{} {}", filter.label(), screen.count(*filter));
            if *filter == screen.filter() {
                format!("[{chip}]")
            } else {
                chip
            }
        })
        .collect();
    let mut lines = vec![chips.join(" ")];
    let visible = screen.visible();
    if visible.is_empty() {
        lines.push(EMPTY_ALERTS.to_string());
    }
    lines.extend(
        visible
            .iter()
            .map(|alert| format!("{} {}", alert.category.label(), alert_line(alert))),
    );
    lines
}

fn analytics(screen: &AnalyticsScreen) -> Vec<String> {
    let mut lines: Vec<String> = screen
        .metrics()
        .iter()
        .map(|card| {
            let arrow = match card.trend {
                Trend::Up => "▲",
                Trend::Down => "▼",
            };
            format!("{}: {} {arrow} {}", card.label, card.value, card.change)
        })
        .collect();
    lines.extend(
        screen
            .zone_reports()
            .iter()
            .map(|report| format!("{} [{}] {}", report.name, report.status.label(), report.details())),
    );
    lines.push(format!("전망: {}", screen.outlook()));
    lines
}

fn settings(screen: &SettingsScreen) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(profile) = screen.profile() {
        lines.push(format!("{} ({})", profile.name, profile.role));
    }
    let preferences = screen.preferences();
    lines.extend(Preference::ALL.iter().map(|preference| {
        let state = if preferences.get(*preference) { "켜짐" } else { "꺼짐" };
        format!("{}: {state}", preference.label())
    }));
    lines.push(format!("버전 {APP_VERSION}"));
    lines
}

fn cctv(screen: &CctvScreen) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(feed) = screen.feed() {
        lines.push(format!("{} · {} · {}", feed.camera_label, feed.location, feed.captured_at));
    }
    let state = if screen.is_playing() { "재생" } else { "정지" };
    lines.push(format!("{} [{state}]", screen.current_time()));
    lines.extend(screen.detections().iter().map(|animal| {
        format!(
            "  {} @ ({:.0}, {:.0})",
            animal.caption(),
            animal.position.x,
            animal.position.y
        )
    }));
    if let Some(feed) = screen.feed() {
        lines.push(format!("위험도: {}", feed.risk.grade()));
        lines.push(format!("권장 조치: {}", feed.recommendation));
    }
    lines
}

fn simulation(screen: &SimulationScreen) -> Vec<String> {
    let mut lines = vec![format!("{}시 [{}]", screen.hour().value(), screen.play_label())];
    lines.extend(screen.zones().iter().map(|zone| {
        format!(
            "{} {} {}/{} 반경 {}m",
            zone.name,
            zone.risk.label(),
            zone.infected_count,
            zone.animal_count,
            screen.radius(zone)
        )
    }));
    if let Some(forecast) = screen.forecast() {
        lines.extend(forecast_lines(forecast));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pigcare_core::clock::FixedClock;
    use pigcare_core::provider::{DataProvider, FixtureProvider, MockProvider};
    use pigcare_core::{Action, ShellConfig, TickTarget};
    use std::sync::Arc;

    fn session_with(provider: Arc<dyn DataProvider>) -> Session {
        let (session, _) = Session::launch(
            ShellConfig::default(),
            provider,
            Arc::new(FixedClock::new("09:00:00")),
        )
        .unwrap();
        session
    }

    fn session() -> Session {
        session_with(Arc::new(MockProvider::new()))
    }

    fn logged_in_with(provider: Arc<dyn DataProvider>) -> Session {
        let mut session = session_with(provider);
        session.dispatch(Action::PhoneChanged("010".into())).unwrap();
        session.dispatch(Action::PasswordChanged("secret".into())).unwrap();
        session.dispatch(Action::SubmitLogin).unwrap();
        session.dispatch(Action::LoginCompleted).unwrap();
        session
    }

    fn logged_in() -> Session {
        let mut session = session();
        session.dispatch(Action::PhoneChanged("010".into())).unwrap();
        session.dispatch(Action::PasswordChanged("secret".into())).unwrap();
        session.dispatch(Action::SubmitLogin).unwrap();
        session.dispatch(Action::LoginCompleted).unwrap();
        session
    }

    #[test]
    fn login_masks_the_password() {
        let mut session = session();
        session.dispatch(Action::PasswordChanged("abc".into())).unwrap();
        let lines = render(&session);
        assert_eq!(lines[0], "== 로그인 ==");
        assert!(lines.contains(&"비밀번호: •••".to_string()));

        session.dispatch(Action::TogglePasswordVisibility).unwrap();
        assert!(render(&session).contains(&"비밀번호: abc".to_string()));
    }

    #[test]
    fn tab_bar_marks_the_active_tab() {
        let session = logged_in();
        let lines = render(&session);
        assert_eq!(lines.last().unwrap(), "[대시보드] | 알림 | 분석 | 설정");
    }

    #[test]
    fn alerts_tab_shows_counts_per_filter() {
        let mut session = logged_in();
        session.dispatch(Action::SelectTab(Tab::Alerts)).unwrap();
        let lines = render(&session);
        assert_eq!(lines[1], "[전체 4] 미해결 3 해결됨 1");
    }

    #[test]
    fn empty_alert_lists_say_so() {
        let provider = FixtureProvider::from_json(r#"{"alerts": [], "recent_alerts": []}"#).unwrap();
        let mut session = logged_in_with(Arc::new(provider));
        let lines = render(&session);
        assert!(lines.contains(&format!("  {EMPTY_ALERTS}")));

        session.dispatch(Action::SelectTab(Tab::Alerts)).unwrap();
        let lines = render(&session);
        assert_eq!(lines[1], "[전체 0] 미해결 0 해결됨 0");
        assert_eq!(lines[2], EMPTY_ALERTS);
    }

    #[test]
    fn resolved_filter_with_nothing_resolved_is_empty() {
        let provider = FixtureProvider::from_json(
            r#"{"alerts": [{
                "id": "7",
                "category": "health",
                "title": "t",
                "message": "m",
                "severity": "high",
                "timestamp": "2024-02-01 08:00",
                "location": "A"
            }]}"#,
        )
        .unwrap();
        let mut session = logged_in_with(Arc::new(provider));
        session.dispatch(Action::SelectTab(Tab::Alerts)).unwrap();
        assert!(!render(&session).contains(&EMPTY_ALERTS.to_string()));

        session
            .dispatch(Action::SetAlertFilter(AlertFilter::Resolved))
            .unwrap();
        let lines = render(&session);
        assert_eq!(lines[1], "전체 1 미해결 1 [해결됨 0]");
        assert_eq!(lines[2], EMPTY_ALERTS);
    }

    #[test]
    fn simulation_lists_zone_radii() {
        let mut session = logged_in();
        session.dispatch(Action::OpenSimulation).unwrap();
        let lines = render(&session);
        assert!(lines[1].starts_with("0시"));
        assert!(lines.iter().any(|line| line.ends_with("반경 30m")));
        assert!(session
            .dispatch(Action::TogglePlayback(TickTarget::SimulationHour))
            .is_ok());
    }

    #[test]
    fn open_notice_is_appended() {
        let mut session = session();
        session.dispatch(Action::SubmitLogin).unwrap();
        let lines = render(&session);
        assert_eq!(
            lines.last().unwrap(),
            "[알림] 휴대폰 번호와 비밀번호를 입력해주세요."
        );
    }
}
