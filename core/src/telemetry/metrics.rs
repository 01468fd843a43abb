use std::sync::Mutex;

/// Session counters, reported by the driver at the end of a walkthrough.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub navigations: usize,
    pub ticks: usize,
    pub stale_ticks: usize,
    pub notices: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_navigation(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.navigations += 1;
        }
    }

    pub fn record_tick(&self, applied: bool) {
        if let Ok(mut metrics) = self.inner.lock() {
            if applied {
                metrics.ticks += 1;
            } else {
                metrics.stale_ticks += 1;
            }
        }
    }

    pub fn record_notice(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.notices += 1;
        }
    }

    pub fn snapshot(&self) -> Metrics {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            Metrics::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
