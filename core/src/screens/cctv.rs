use crate::clock::Playback;
use crate::model::{CameraFeed, DetectedAnimal};
use crate::prelude::{Effect, Screen, ScreenContext, ShellResult, TickTarget};
use crate::telemetry::LogManager;
use std::time::Duration;

/// Width and height of a detection box in frame pixels.
pub const DETECTION_BOX: (f32, f32) = (80.0, 60.0);

/// CCTV viewer. Playback starts running as soon as the screen mounts.
#[derive(Debug)]
pub struct CctvScreen {
    feed: Option<CameraFeed>,
    detections: Vec<DetectedAnimal>,
    playback: Playback,
    current_time: String,
    period: Duration,
    logger: LogManager,
}

impl Default for CctvScreen {
    fn default() -> Self {
        Self {
            feed: None,
            detections: Vec::new(),
            playback: Playback::new(),
            current_time: String::new(),
            period: Duration::from_secs(1),
            logger: LogManager::new("cctv"),
        }
    }
}

impl CctvScreen {
    pub fn feed(&self) -> Option<&CameraFeed> {
        self.feed.as_ref()
    }

    pub fn detections(&self) -> &[DetectedAnimal] {
        &self.detections
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn current_time(&self) -> &str {
        &self.current_time
    }

    fn start_effect(&mut self, generation: u64) -> Effect {
        Effect::StartTicker {
            target: TickTarget::CctvClock,
            period: self.period,
            generation: self.playback.start(generation),
        }
    }

    /// Pauses, or resumes under `next`.
    pub fn toggle_playback(&mut self, next: u64) -> Vec<Effect> {
        if self.playback.is_playing() {
            self.playback.stop();
            self.logger.detail("paused");
            vec![Effect::StopTicker {
                target: TickTarget::CctvClock,
            }]
        } else {
            self.logger.detail("playing");
            vec![self.start_effect(next)]
        }
    }

    /// Applies a clock tick; ticks from a paused or superseded run are ignored.
    pub fn on_tick(&mut self, generation: u64, now: String) -> bool {
        if !self.playback.accepts(generation) {
            return false;
        }
        self.current_time = now;
        true
    }
}

impl Screen for CctvScreen {
    fn mount(&mut self, ctx: &ScreenContext<'_>) -> ShellResult<Vec<Effect>> {
        let feed = ctx.provider.camera_feed()?;
        self.current_time = feed.start_time.clone();
        self.feed = Some(feed);
        self.detections = ctx.provider.detections()?;
        self.period = ctx.config.cctv_tick();
        self.logger
            .record(&format!("{} detections on screen", self.detections.len()));
        Ok(vec![self.start_effect(ctx.generation)])
    }

    fn unmount(&mut self) -> Vec<Effect> {
        if self.playback.stop() {
            vec![Effect::StopTicker {
                target: TickTarget::CctvClock,
            }]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::ShellConfig;
    use crate::provider::MockProvider;

    fn mounted() -> (CctvScreen, Vec<Effect>) {
        let config = ShellConfig::default();
        let ctx = ScreenContext {
            provider: &MockProvider,
            clock: &FixedClock::new("09:00:00"),
            config: &config,
            generation: 1,
        };
        let mut screen = CctvScreen::default();
        let effects = screen.mount(&ctx).unwrap();
        (screen, effects)
    }

    #[test]
    fn mount_starts_the_clock() {
        let (screen, effects) = mounted();
        assert!(screen.is_playing());
        assert_eq!(screen.current_time(), "14:32:15");
        assert_eq!(
            effects,
            vec![Effect::StartTicker {
                target: TickTarget::CctvClock,
                period: Duration::from_secs(1),
                generation: 1
            }]
        );
    }

    #[test]
    fn ticks_after_pause_are_dropped() {
        let (mut screen, _) = mounted();
        assert!(screen.on_tick(1, "14:32:16".into()));
        screen.toggle_playback(2);
        assert!(!screen.on_tick(1, "14:32:17".into()));
        assert_eq!(screen.current_time(), "14:32:16");
    }

    #[test]
    fn unmount_stops_a_running_clock_only() {
        let (mut screen, _) = mounted();
        assert_eq!(screen.unmount().len(), 1);
        assert!(screen.unmount().is_empty());
    }
}
