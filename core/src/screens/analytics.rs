use crate::model::{MetricCard, ZoneReport};
use crate::prelude::{Effect, Screen, ScreenContext, ShellResult};

/// Read-only analytics tab.
#[derive(Debug, Default)]
pub struct AnalyticsScreen {
    metrics: Vec<MetricCard>,
    zone_reports: Vec<ZoneReport>,
    outlook: String,
}

impl AnalyticsScreen {
    pub fn metrics(&self) -> &[MetricCard] {
        &self.metrics
    }

    pub fn zone_reports(&self) -> &[ZoneReport] {
        &self.zone_reports
    }

    pub fn outlook(&self) -> &str {
        &self.outlook
    }
}

impl Screen for AnalyticsScreen {
    fn mount(&mut self, ctx: &ScreenContext<'_>) -> ShellResult<Vec<Effect>> {
        self.metrics = ctx.provider.metrics()?;
        self.zone_reports = ctx.provider.zone_reports()?;
        self.outlook = ctx.provider.forecast()?.outbreak_outlook;
        Ok(Vec::new())
    }

    fn unmount(&mut self) -> Vec<Effect> {
        Vec::new()
    }
}
