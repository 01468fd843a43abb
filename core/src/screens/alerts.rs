use crate::analysis::AlertFilter;
use crate::model::Alert;
use crate::prelude::{Effect, Screen, ScreenContext, ShellError, ShellResult};
use crate::telemetry::LogManager;

/// Shown in place of an alert list that has nothing to show.
pub const EMPTY_ALERTS: &str = "표시할 알림이 없습니다";

/// Alerts tab: the seeded list plus the resolved/unresolved selector.
#[derive(Debug)]
pub struct AlertsScreen {
    alerts: Vec<Alert>,
    filter: AlertFilter,
    logger: LogManager,
}

impl Default for AlertsScreen {
    fn default() -> Self {
        Self {
            alerts: Vec::new(),
            filter: AlertFilter::All,
            logger: LogManager::new("alerts"),
        }
    }
}

impl AlertsScreen {
    pub fn filter(&self) -> AlertFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: AlertFilter) {
        self.filter = filter;
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Alerts under the current selector, recomputed on every call.
    pub fn visible(&self) -> Vec<&Alert> {
        self.filter.apply(&self.alerts)
    }

    pub fn count(&self, filter: AlertFilter) -> usize {
        self.alerts.iter().filter(|alert| filter.matches(alert)).count()
    }

    /// Looks up a tapped alert; `Ok(true)` when it should open the CCTV screen.
    pub fn open(&self, id: &str) -> ShellResult<bool> {
        let alert = self
            .alerts
            .iter()
            .find(|alert| alert.id == id)
            .ok_or_else(|| ShellError::InvalidAction(format!("unknown alert {id}")))?;
        self.logger.detail(&format!("opened alert {} ({})", alert.id, alert.title));
        Ok(alert.opens_footage())
    }
}

impl Screen for AlertsScreen {
    fn mount(&mut self, ctx: &ScreenContext<'_>) -> ShellResult<Vec<Effect>> {
        self.alerts = ctx.provider.alerts()?;
        self.filter = AlertFilter::All;
        Ok(Vec::new())
    }

    fn unmount(&mut self) -> Vec<Effect> {
        Vec::new()
    }
}
