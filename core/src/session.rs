//! The shell's single source of truth.
//!
//! A [`Session`] owns the route stack and one view-model per mounted screen.
//! Front ends feed it [`Action`]s and carry out the [`Effect`]s it returns;
//! it never sleeps or spawns on its own.

use crate::clock::{Generations, WallClock};
use crate::config::ShellConfig;
use crate::navigation::{Navigator, Route, Tab};
use crate::prelude::{Action, Effect, Notice, Screen, ScreenContext, ShellResult, TickTarget};
use crate::provider::DataProvider;
use crate::screens::{
    AlertsScreen, AnalyticsScreen, CctvScreen, DashboardScreen, LoginScreen, SettingsScreen,
    SimulationScreen,
};
use crate::telemetry::{Metrics, MetricsRecorder, LogManager};
use std::sync::Arc;

pub struct Session {
    config: ShellConfig,
    provider: Arc<dyn DataProvider>,
    clock: Arc<dyn WallClock>,
    navigator: Navigator,
    notice: Option<Notice>,
    login: Option<LoginScreen>,
    dashboard: Option<DashboardScreen>,
    alerts: Option<AlertsScreen>,
    analytics: Option<AnalyticsScreen>,
    settings: Option<SettingsScreen>,
    cctv: Option<CctvScreen>,
    simulation: Option<SimulationScreen>,
    generations: Generations,
    metrics: MetricsRecorder,
    logger: LogManager,
}

fn mount_slot<S: Screen + Default>(
    slot: &mut Option<S>,
    ctx: &ScreenContext<'_>,
) -> ShellResult<Vec<Effect>> {
    if slot.is_some() {
        return Ok(Vec::new());
    }
    let mut screen = S::default();
    let effects = screen.mount(ctx)?;
    *slot = Some(screen);
    Ok(effects)
}

fn unmount_slot<S: Screen>(slot: &mut Option<S>) -> Vec<Effect> {
    slot.take()
        .map(|mut screen| screen.unmount())
        .unwrap_or_default()
}

impl Session {
    /// Opens the shell on the login screen.
    pub fn launch(
        config: ShellConfig,
        provider: Arc<dyn DataProvider>,
        clock: Arc<dyn WallClock>,
    ) -> ShellResult<(Self, Vec<Effect>)> {
        config.validate()?;
        let mut session = Self {
            config,
            provider,
            clock,
            navigator: Navigator::launch(),
            notice: None,
            login: None,
            dashboard: None,
            alerts: None,
            analytics: None,
            settings: None,
            cctv: None,
            simulation: None,
            generations: Generations::default(),
            metrics: MetricsRecorder::new(),
            logger: LogManager::new("session"),
        };
        let effects = session.mount_route(Route::Login)?;
        session.logger.record("launched on login");
        Ok((session, effects))
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn depth(&self) -> usize {
        self.navigator.depth()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn login(&self) -> Option<&LoginScreen> {
        self.login.as_ref()
    }

    pub fn dashboard(&self) -> Option<&DashboardScreen> {
        self.dashboard.as_ref()
    }

    pub fn alerts(&self) -> Option<&AlertsScreen> {
        self.alerts.as_ref()
    }

    pub fn analytics(&self) -> Option<&AnalyticsScreen> {
        self.analytics.as_ref()
    }

    pub fn settings(&self) -> Option<&SettingsScreen> {
        self.settings.as_ref()
    }

    pub fn cctv(&self) -> Option<&CctvScreen> {
        self.cctv.as_ref()
    }

    pub fn simulation(&self) -> Option<&SimulationScreen> {
        self.simulation.as_ref()
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics.snapshot()
    }

    pub fn dispatch(&mut self, action: Action) -> ShellResult<Vec<Effect>> {
        if self.notice.is_some() && action.is_user_intent() {
            self.logger
                .detail(&format!("notice open, ignoring {action:?}"));
            return Ok(Vec::new());
        }

        let effects = match action {
            Action::DismissNotice => {
                self.notice = None;
                Vec::new()
            }
            Action::PhoneChanged(phone) => {
                if let Some(login) = self.login.as_mut() {
                    login.set_phone(phone);
                }
                Vec::new()
            }
            Action::PasswordChanged(password) => {
                if let Some(login) = self.login.as_mut() {
                    login.set_password(password);
                }
                Vec::new()
            }
            Action::TogglePasswordVisibility => {
                if let Some(login) = self.login.as_mut() {
                    login.toggle_password_visibility();
                }
                Vec::new()
            }
            Action::SubmitLogin => self
                .login
                .as_mut()
                .map(LoginScreen::submit)
                .unwrap_or_default(),
            Action::LoginCompleted => {
                let completed = self.login.as_mut().is_some_and(LoginScreen::complete);
                if completed {
                    self.replace(Route::Tabs(Tab::Dashboard))?
                } else {
                    Vec::new()
                }
            }
            Action::ForgotPassword => self
                .login
                .as_ref()
                .map(|login| vec![Effect::Notice(login.forgot_password())])
                .unwrap_or_default(),
            Action::SignUp => self
                .login
                .as_ref()
                .map(|login| vec![Effect::Notice(login.sign_up())])
                .unwrap_or_default(),
            Action::SelectTab(tab) => self.select_tab(tab)?,
            Action::ViewAllAlerts => self.select_tab(Tab::Alerts)?,
            Action::OpenSimulation => {
                if self.route() == Route::Tabs(Tab::Dashboard) {
                    self.push(Route::Simulation)?
                } else {
                    Vec::new()
                }
            }
            Action::OpenAlert(id) => {
                let opens_footage = match (&self.alerts, self.route()) {
                    (Some(alerts), Route::Tabs(Tab::Alerts)) => alerts.open(&id)?,
                    _ => false,
                };
                if opens_footage {
                    self.push(Route::Cctv)?
                } else {
                    Vec::new()
                }
            }
            Action::Back => self.back(),
            Action::Refresh => self
                .dashboard
                .as_mut()
                .map(DashboardScreen::refresh)
                .unwrap_or_default(),
            Action::RefreshCompleted => {
                let now = self.clock.time_label();
                if let Some(dashboard) = self.dashboard.as_mut() {
                    dashboard.complete_refresh(now);
                }
                Vec::new()
            }
            Action::StartDisinfection => self
                .dashboard
                .as_mut()
                .map(DashboardScreen::start_disinfection)
                .unwrap_or_default(),
            Action::DisinfectionCompleted => {
                let now = self.clock.time_label();
                if let Some(dashboard) = self.dashboard.as_mut() {
                    dashboard.complete_disinfection(&now);
                }
                Vec::new()
            }
            Action::SetAlertFilter(filter) => {
                if let Some(alerts) = self.alerts.as_mut() {
                    alerts.set_filter(filter);
                }
                Vec::new()
            }
            Action::SetPreference(preference, enabled) => {
                if let Some(settings) = self.settings.as_mut() {
                    settings.set_preference(preference, enabled);
                }
                Vec::new()
            }
            Action::TogglePlayback(TickTarget::CctvClock) => {
                let next = self.generations.next();
                self.cctv
                    .as_mut()
                    .map(|cctv| cctv.toggle_playback(next))
                    .unwrap_or_default()
            }
            Action::TogglePlayback(TickTarget::SimulationHour) => {
                let next = self.generations.next();
                self.simulation
                    .as_mut()
                    .map(|simulation| simulation.toggle_playback(next))
                    .unwrap_or_default()
            }
            Action::Tick { target, generation } => {
                let applied = match target {
                    TickTarget::CctvClock => {
                        let now = self.clock.time_label();
                        self.cctv
                            .as_mut()
                            .is_some_and(|cctv| cctv.on_tick(generation, now))
                    }
                    TickTarget::SimulationHour => self
                        .simulation
                        .as_mut()
                        .is_some_and(|simulation| simulation.on_tick(generation)),
                };
                self.metrics.record_tick(applied);
                Vec::new()
            }
            Action::Rewind | Action::SendEmergencyAlert | Action::StartIsolation => {
                if self.cctv.is_some() {
                    self.logger
                        .record(&format!("{action:?} requested; no backend attached"));
                }
                Vec::new()
            }
        };

        Ok(self.surface(effects))
    }

    /// Latches any notice in `effects` so it blocks further intents.
    fn surface(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        for effect in &effects {
            if let Effect::Notice(notice) = effect {
                self.metrics.record_notice();
                self.notice = Some(notice.clone());
            }
        }
        effects
    }

    fn replace(&mut self, route: Route) -> ShellResult<Vec<Effect>> {
        let mut effects = Vec::new();
        for leaving in self.navigator.replace(route).into_iter().rev() {
            effects.extend(self.unmount_route(leaving));
        }
        effects.extend(self.mount_route(route)?);
        self.metrics.record_navigation();
        self.logger.record(&format!("-> {}", route.name()));
        Ok(effects)
    }

    fn push(&mut self, route: Route) -> ShellResult<Vec<Effect>> {
        self.navigator.push(route);
        let effects = self.mount_route(route)?;
        self.metrics.record_navigation();
        self.logger.record(&format!("push {}", route.name()));
        Ok(effects)
    }

    fn back(&mut self) -> Vec<Effect> {
        match self.navigator.back() {
            Some(leaving) => {
                self.metrics.record_navigation();
                self.logger
                    .record(&format!("back to {}", self.navigator.current().name()));
                self.unmount_route(leaving)
            }
            None => Vec::new(),
        }
    }

    fn select_tab(&mut self, tab: Tab) -> ShellResult<Vec<Effect>> {
        if !self.navigator.select_tab(tab) {
            return Ok(Vec::new());
        }
        self.metrics.record_navigation();
        self.mount_route(Route::Tabs(tab))
    }

    fn mount_route(&mut self, route: Route) -> ShellResult<Vec<Effect>> {
        let ctx = ScreenContext {
            provider: self.provider.as_ref(),
            clock: self.clock.as_ref(),
            config: &self.config,
            generation: self.generations.next(),
        };
        match route {
            Route::Login => mount_slot(&mut self.login, &ctx),
            Route::Tabs(Tab::Dashboard) => mount_slot(&mut self.dashboard, &ctx),
            Route::Tabs(Tab::Alerts) => mount_slot(&mut self.alerts, &ctx),
            Route::Tabs(Tab::Analytics) => mount_slot(&mut self.analytics, &ctx),
            Route::Tabs(Tab::Settings) => mount_slot(&mut self.settings, &ctx),
            Route::Cctv => mount_slot(&mut self.cctv, &ctx),
            Route::Simulation => mount_slot(&mut self.simulation, &ctx),
        }
    }

    /// Tearing down any tab tears down the whole tab group.
    fn unmount_route(&mut self, route: Route) -> Vec<Effect> {
        match route {
            Route::Login => unmount_slot(&mut self.login),
            Route::Tabs(_) => {
                let mut effects = unmount_slot(&mut self.dashboard);
                effects.extend(unmount_slot(&mut self.alerts));
                effects.extend(unmount_slot(&mut self.analytics));
                effects.extend(unmount_slot(&mut self.settings));
                effects
            }
            Route::Cctv => unmount_slot(&mut self.cctv),
            Route::Simulation => unmount_slot(&mut self.simulation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AlertFilter;
    use crate::clock::FixedClock;
    use crate::provider::MockProvider;
    use crate::screens::login::MISSING_CREDENTIALS;
    use std::time::Duration;

    fn launch() -> Session {
        let (session, effects) = Session::launch(
            ShellConfig::default(),
            Arc::new(MockProvider::new()),
            Arc::new(FixedClock::new("15:00:00")),
        )
        .unwrap();
        assert!(effects.is_empty());
        session
    }

    fn logged_in() -> Session {
        let mut session = launch();
        session
            .dispatch(Action::PhoneChanged("010-0000-0000".into()))
            .unwrap();
        session.dispatch(Action::PasswordChanged("pw".into())).unwrap();
        session.dispatch(Action::SubmitLogin).unwrap();
        session.dispatch(Action::LoginCompleted).unwrap();
        session
    }

    fn started_generation(effects: &[Effect], target: TickTarget) -> u64 {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::StartTicker {
                    target: t,
                    generation,
                    ..
                } if *t == target => Some(*generation),
                _ => None,
            })
            .expect("ticker start")
    }

    #[test]
    fn empty_login_shows_notice_and_stays() {
        let mut session = launch();
        let effects = session.dispatch(Action::SubmitLogin).unwrap();
        let expected = Notice::new(MISSING_CREDENTIALS.0, MISSING_CREDENTIALS.1);
        assert_eq!(effects, vec![Effect::Notice(expected.clone())]);
        assert_eq!(session.notice(), Some(&expected));
        assert_eq!(session.route(), Route::Login);
    }

    #[test]
    fn filled_login_lands_on_dashboard_after_delay() {
        let mut session = launch();
        session.dispatch(Action::PhoneChanged("010".into())).unwrap();
        session.dispatch(Action::PasswordChanged("pw".into())).unwrap();
        let effects = session.dispatch(Action::SubmitLogin).unwrap();
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                delay: Duration::from_millis(1_500),
                action: Action::LoginCompleted
            }]
        );
        assert_eq!(session.route(), Route::Login);

        session.dispatch(Action::LoginCompleted).unwrap();
        assert_eq!(session.route(), Route::Tabs(Tab::Dashboard));
        assert!(session.login().is_none());
        assert!(session.dashboard().is_some());
        assert_eq!(session.depth(), 1);
    }

    #[test]
    fn open_notice_blocks_intents_until_dismissed() {
        let mut session = launch();
        session.dispatch(Action::SignUp).unwrap();
        session.dispatch(Action::PhoneChanged("010".into())).unwrap();
        assert_eq!(session.login().unwrap().phone(), "");
        session.dispatch(Action::DismissNotice).unwrap();
        session.dispatch(Action::PhoneChanged("010".into())).unwrap();
        assert_eq!(session.login().unwrap().phone(), "010");
    }

    #[test]
    fn alert_filters_follow_seed_data() {
        let mut session = logged_in();
        session.dispatch(Action::SelectTab(Tab::Alerts)).unwrap();

        session
            .dispatch(Action::SetAlertFilter(AlertFilter::Resolved))
            .unwrap();
        let resolved: Vec<_> = session
            .alerts()
            .unwrap()
            .visible()
            .iter()
            .map(|a| a.id.clone())
            .collect();
        assert_eq!(resolved, vec!["2"]);

        session
            .dispatch(Action::SetAlertFilter(AlertFilter::Unresolved))
            .unwrap();
        let unresolved: Vec<_> = session
            .alerts()
            .unwrap()
            .visible()
            .iter()
            .map(|a| a.id.clone())
            .collect();
        assert_eq!(unresolved, vec!["1", "3", "4"]);
    }

    #[test]
    fn movement_alert_opens_cctv_and_back_stops_its_clock() {
        let mut session = logged_in();
        session.dispatch(Action::SelectTab(Tab::Alerts)).unwrap();
        let effects = session.dispatch(Action::OpenAlert("1".into())).unwrap();
        assert_eq!(session.route(), Route::Cctv);
        started_generation(&effects, TickTarget::CctvClock);

        let effects = session.dispatch(Action::Back).unwrap();
        assert_eq!(
            effects,
            vec![Effect::StopTicker {
                target: TickTarget::CctvClock
            }]
        );
        assert_eq!(session.route(), Route::Tabs(Tab::Alerts));
        assert!(session.cctv().is_none());
    }

    #[test]
    fn other_alerts_stay_on_the_list() {
        let mut session = logged_in();
        session.dispatch(Action::SelectTab(Tab::Alerts)).unwrap();
        assert!(session
            .dispatch(Action::OpenAlert("2".into()))
            .unwrap()
            .is_empty());
        assert_eq!(session.route(), Route::Tabs(Tab::Alerts));
    }

    #[test]
    fn cctv_toggles_keep_a_single_live_generation() {
        let mut session = logged_in();
        session.dispatch(Action::SelectTab(Tab::Alerts)).unwrap();
        let effects = session.dispatch(Action::OpenAlert("1".into())).unwrap();
        let mut live = started_generation(&effects, TickTarget::CctvClock);
        let mut retired = Vec::new();

        for _ in 0..2 {
            let pause = session
                .dispatch(Action::TogglePlayback(TickTarget::CctvClock))
                .unwrap();
            assert_eq!(
                pause,
                vec![Effect::StopTicker {
                    target: TickTarget::CctvClock
                }]
            );
            retired.push(live);
            let play = session
                .dispatch(Action::TogglePlayback(TickTarget::CctvClock))
                .unwrap();
            live = started_generation(&play, TickTarget::CctvClock);
        }

        for old in retired {
            session
                .dispatch(Action::Tick {
                    target: TickTarget::CctvClock,
                    generation: old,
                })
                .unwrap();
        }
        assert_eq!(session.cctv().unwrap().current_time(), "14:32:15");

        session
            .dispatch(Action::Tick {
                target: TickTarget::CctvClock,
                generation: live,
            })
            .unwrap();
        assert_eq!(session.cctv().unwrap().current_time(), "15:00:00");
        let metrics = session.metrics();
        assert_eq!(metrics.ticks, 1);
        assert_eq!(metrics.stale_ticks, 2);
    }

    #[test]
    fn simulation_hour_tracks_tick_count() {
        let mut session = logged_in();
        session.dispatch(Action::OpenSimulation).unwrap();
        assert_eq!(session.route(), Route::Simulation);
        let effects = session
            .dispatch(Action::TogglePlayback(TickTarget::SimulationHour))
            .unwrap();
        let generation = started_generation(&effects, TickTarget::SimulationHour);
        for _ in 0..26 {
            session
                .dispatch(Action::Tick {
                    target: TickTarget::SimulationHour,
                    generation,
                })
                .unwrap();
        }
        assert_eq!(session.simulation().unwrap().hour().value(), 2);
    }

    #[test]
    fn simulation_state_resets_on_remount() {
        let mut session = logged_in();
        session.dispatch(Action::OpenSimulation).unwrap();
        let effects = session
            .dispatch(Action::TogglePlayback(TickTarget::SimulationHour))
            .unwrap();
        let generation = started_generation(&effects, TickTarget::SimulationHour);
        session
            .dispatch(Action::Tick {
                target: TickTarget::SimulationHour,
                generation,
            })
            .unwrap();
        let effects = session.dispatch(Action::Back).unwrap();
        assert_eq!(
            effects,
            vec![Effect::StopTicker {
                target: TickTarget::SimulationHour
            }]
        );

        session.dispatch(Action::OpenSimulation).unwrap();
        let simulation = session.simulation().unwrap();
        assert_eq!(simulation.hour().value(), 0);
        assert!(!simulation.is_playing());
    }

    #[test]
    fn ticks_from_an_earlier_simulation_mount_are_ignored() {
        let mut session = logged_in();
        session.dispatch(Action::OpenSimulation).unwrap();
        let effects = session
            .dispatch(Action::TogglePlayback(TickTarget::SimulationHour))
            .unwrap();
        let earlier = started_generation(&effects, TickTarget::SimulationHour);
        session.dispatch(Action::Back).unwrap();

        session.dispatch(Action::OpenSimulation).unwrap();
        let effects = session
            .dispatch(Action::TogglePlayback(TickTarget::SimulationHour))
            .unwrap();
        let current = started_generation(&effects, TickTarget::SimulationHour);
        assert_ne!(earlier, current);

        session
            .dispatch(Action::Tick {
                target: TickTarget::SimulationHour,
                generation: earlier,
            })
            .unwrap();
        assert_eq!(session.simulation().unwrap().hour().value(), 0);
        assert_eq!(session.metrics().stale_ticks, 1);
    }

    #[test]
    fn ticks_from_an_earlier_cctv_mount_are_ignored() {
        let mut session = logged_in();
        session.dispatch(Action::SelectTab(Tab::Alerts)).unwrap();
        let effects = session.dispatch(Action::OpenAlert("1".into())).unwrap();
        let earlier = started_generation(&effects, TickTarget::CctvClock);
        session.dispatch(Action::Back).unwrap();

        let effects = session.dispatch(Action::OpenAlert("1".into())).unwrap();
        let current = started_generation(&effects, TickTarget::CctvClock);
        assert_ne!(earlier, current);

        session
            .dispatch(Action::Tick {
                target: TickTarget::CctvClock,
                generation: earlier,
            })
            .unwrap();
        assert_eq!(session.cctv().unwrap().current_time(), "14:32:15");
    }

    #[test]
    fn late_completions_after_teardown_are_ignored() {
        let mut session = launch();
        session.dispatch(Action::RefreshCompleted).unwrap();
        session.dispatch(Action::LoginCompleted).unwrap();
        assert_eq!(session.route(), Route::Login);
    }

    #[test]
    fn view_all_switches_to_alerts_tab() {
        let mut session = logged_in();
        session.dispatch(Action::ViewAllAlerts).unwrap();
        assert_eq!(session.route(), Route::Tabs(Tab::Alerts));
        assert!(session.dashboard().is_some());
        assert!(session.alerts().is_some());
    }

    #[test]
    fn refresh_stamps_the_reading() {
        let mut session = logged_in();
        let effects = session.dispatch(Action::Refresh).unwrap();
        assert_eq!(effects.len(), 1);
        assert!(session.dashboard().unwrap().is_refreshing());
        session.dispatch(Action::RefreshCompleted).unwrap();
        let dashboard = session.dashboard().unwrap();
        assert!(!dashboard.is_refreshing());
        assert_eq!(dashboard.reading().unwrap().updated_at, "15:00:00");
    }
}
