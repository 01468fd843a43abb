use crate::analysis::spread_radius;
use crate::clock::{Playback, SimulatedHour};
use crate::model::{Forecast, SimulationZone};
use crate::prelude::{Effect, Screen, ScreenContext, ShellResult, TickTarget};
use crate::telemetry::LogManager;
use std::time::Duration;

/// Disease-spread viewer: zones on a layout plus a ticking simulated hour.
#[derive(Debug)]
pub struct SimulationScreen {
    zones: Vec<SimulationZone>,
    forecast: Option<Forecast>,
    hour: SimulatedHour,
    playback: Playback,
    period: Duration,
    logger: LogManager,
}

impl Default for SimulationScreen {
    fn default() -> Self {
        Self {
            zones: Vec::new(),
            forecast: None,
            hour: SimulatedHour::default(),
            playback: Playback::new(),
            period: Duration::from_millis(500),
            logger: LogManager::new("simulation"),
        }
    }
}

impl SimulationScreen {
    pub fn zones(&self) -> &[SimulationZone] {
        &self.zones
    }

    pub fn forecast(&self) -> Option<&Forecast> {
        self.forecast.as_ref()
    }

    pub fn hour(&self) -> SimulatedHour {
        self.hour
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn play_label(&self) -> &'static str {
        if self.playback.is_playing() {
            "일시정지"
        } else {
            "시뮬레이션 시작"
        }
    }

    pub fn radius(&self, zone: &SimulationZone) -> u32 {
        spread_radius(zone.risk, self.hour.value())
    }

    /// Pauses, or resumes under `next`.
    pub fn toggle_playback(&mut self, next: u64) -> Vec<Effect> {
        match self.playback.toggle(next) {
            Some(generation) => {
                self.logger
                    .detail(&format!("running from hour {}", self.hour.value()));
                vec![Effect::StartTicker {
                    target: TickTarget::SimulationHour,
                    period: self.period,
                    generation,
                }]
            }
            None => {
                self.logger
                    .detail(&format!("paused at hour {}", self.hour.value()));
                vec![Effect::StopTicker {
                    target: TickTarget::SimulationHour,
                }]
            }
        }
    }

    pub fn on_tick(&mut self, generation: u64) -> bool {
        if !self.playback.accepts(generation) {
            return false;
        }
        self.hour.advance();
        true
    }
}

impl Screen for SimulationScreen {
    fn mount(&mut self, ctx: &ScreenContext<'_>) -> ShellResult<Vec<Effect>> {
        self.zones = ctx.provider.zones()?;
        self.forecast = Some(ctx.provider.forecast()?);
        self.period = ctx.config.simulation_tick();
        Ok(Vec::new())
    }

    fn unmount(&mut self) -> Vec<Effect> {
        if self.playback.stop() {
            vec![Effect::StopTicker {
                target: TickTarget::SimulationHour,
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
    use crate::model::RiskLevel;
    use crate::provider::MockProvider;

    fn mounted() -> SimulationScreen {
        let config = ShellConfig::default();
        let ctx = ScreenContext {
            provider: &MockProvider,
            clock: &FixedClock::new("09:00:00"),
            config: &config,
            generation: 1,
        };
        let mut screen = SimulationScreen::default();
        assert!(screen.mount(&ctx).unwrap().is_empty());
        screen
    }

    fn generation_of(effects: &[Effect]) -> u64 {
        match effects {
            [Effect::StartTicker { generation, .. }] => *generation,
            other => panic!("expected a single start, got {other:?}"),
        }
    }

    #[test]
    fn starts_paused_at_hour_zero() {
        let screen = mounted();
        assert!(!screen.is_playing());
        assert_eq!(screen.hour().value(), 0);
        assert_eq!(screen.play_label(), "시뮬레이션 시작");
    }

    #[test]
    fn thirty_ticks_wrap_to_hour_six() {
        let mut screen = mounted();
        let generation = generation_of(&screen.toggle_playback(2));
        for _ in 0..30 {
            assert!(screen.on_tick(generation));
        }
        assert_eq!(screen.hour().value(), 6);
        let high = screen
            .zones()
            .iter()
            .find(|zone| zone.risk == RiskLevel::High)
            .cloned()
            .unwrap();
        assert_eq!(screen.radius(&high), 42);
    }

    #[test]
    fn resume_ignores_the_previous_run() {
        let mut screen = mounted();
        let first = generation_of(&screen.toggle_playback(2));
        screen.toggle_playback(3);
        let second = generation_of(&screen.toggle_playback(4));
        assert!(!screen.on_tick(first));
        assert!(screen.on_tick(second));
        assert_eq!(screen.hour().value(), 1);
    }
}
