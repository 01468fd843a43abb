use chrono::Local;

/// Source of the wall-clock labels shown on screen.
pub trait WallClock: Send + Sync {
    /// Current local time as `HH:MM:SS`.
    fn time_label(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn time_label(&self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }
}

/// Clock frozen at one label.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl WallClock for FixedClock {
    fn time_label(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_formats_hours_minutes_seconds() {
        let label = SystemClock.time_label();
        assert_eq!(label.len(), 8);
        assert_eq!(label.matches(':').count(), 2);
    }
}
