use crate::model::{Alert, FarmStatus, Forecast, SensorReading};
use crate::prelude::{Action, Effect, Screen, ScreenContext, ShellResult};
use crate::telemetry::LogManager;
use std::time::Duration;

/// Default dashboard tab: sensors, status badge, recent alerts, disinfection and forecast.
#[derive(Debug)]
pub struct DashboardScreen {
    farm_name: String,
    status: FarmStatus,
    reading: Option<SensorReading>,
    recent_alerts: Vec<Alert>,
    forecast: Option<Forecast>,
    refreshing: bool,
    disinfecting: bool,
    last_disinfection: String,
    refresh_delay: Duration,
    disinfection_duration: Duration,
    logger: LogManager,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self {
            farm_name: String::new(),
            status: FarmStatus::Normal,
            reading: None,
            recent_alerts: Vec::new(),
            forecast: None,
            refreshing: false,
            disinfecting: false,
            last_disinfection: "오늘 12:00".into(),
            refresh_delay: Duration::ZERO,
            disinfection_duration: Duration::ZERO,
            logger: LogManager::new("dashboard"),
        }
    }
}

impl DashboardScreen {
    pub fn farm_name(&self) -> &str {
        &self.farm_name
    }

    pub fn status(&self) -> FarmStatus {
        self.status
    }

    pub fn reading(&self) -> Option<&SensorReading> {
        self.reading.as_ref()
    }

    pub fn recent_alerts(&self) -> &[Alert] {
        &self.recent_alerts
    }

    pub fn forecast(&self) -> Option<&Forecast> {
        self.forecast.as_ref()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_disinfecting(&self) -> bool {
        self.disinfecting
    }

    pub fn disinfection_label(&self) -> &'static str {
        if self.disinfecting {
            "소독 진행중"
        } else {
            "대기 상태"
        }
    }

    pub fn last_disinfection(&self) -> &str {
        &self.last_disinfection
    }

    pub fn refresh(&mut self) -> Vec<Effect> {
        if self.refreshing {
            return Vec::new();
        }
        self.refreshing = true;
        vec![Effect::Schedule {
            delay: self.refresh_delay,
            action: Action::RefreshCompleted,
        }]
    }

    /// Ends a pending refresh by stamping the reading with `now`.
    pub fn complete_refresh(&mut self, now: String) -> bool {
        if !self.refreshing {
            return false;
        }
        self.refreshing = false;
        if let Some(reading) = self.reading.as_mut() {
            *reading = reading.touched(now);
        }
        true
    }

    pub fn start_disinfection(&mut self) -> Vec<Effect> {
        if self.disinfecting {
            return Vec::new();
        }
        self.disinfecting = true;
        self.logger.record("manual disinfection started");
        vec![Effect::Schedule {
            delay: self.disinfection_duration,
            action: Action::DisinfectionCompleted,
        }]
    }

    pub fn complete_disinfection(&mut self, now: &str) -> bool {
        if !self.disinfecting {
            return false;
        }
        self.disinfecting = false;
        let hhmm = now.get(..5).unwrap_or(now);
        self.last_disinfection = format!("오늘 {hhmm}");
        self.logger.record("manual disinfection finished");
        true
    }
}

impl Screen for DashboardScreen {
    fn mount(&mut self, ctx: &ScreenContext<'_>) -> ShellResult<Vec<Effect>> {
        self.farm_name = ctx.config.farm_name.clone();
        self.refresh_delay = ctx.config.refresh_delay();
        self.disinfection_duration = ctx.config.disinfection_duration();
        self.reading = Some(ctx.provider.sensor_reading()?.touched(ctx.clock.time_label()));
        self.recent_alerts = ctx.provider.recent_alerts()?;
        self.forecast = Some(ctx.provider.forecast()?);
        self.logger.detail(&format!("mounted with {} recent alerts", self.recent_alerts.len()));
        Ok(Vec::new())
    }

    fn unmount(&mut self) -> Vec<Effect> {
        self.refreshing = false;
        self.disinfecting = false;
        Vec::new()
    }
}
