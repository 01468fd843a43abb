use iced::{time, Subscription};
use pigcare_core::{Action, Effect, TickTarget};
use std::collections::HashMap;
use std::time::Duration;

/// Tickers the session asked for, kept as iced subscriptions.
///
/// A subscription is identified by its target, period and generation, so a
/// restart with a new generation replaces the old timer instead of adding one.
#[derive(Debug, Default)]
pub struct TickerBook {
    running: HashMap<TickTarget, (Duration, u64)>,
}

impl TickerBook {
    /// Records ticker effects; anything else is handed back to the caller.
    pub fn absorb(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        let mut rest = Vec::new();
        for effect in effects {
            match effect {
                Effect::StartTicker {
                    target,
                    period,
                    generation,
                } => {
                    self.running.insert(target, (period, generation));
                }
                Effect::StopTicker { target } => {
                    self.running.remove(&target);
                }
                other => rest.push(other),
            }
        }
        rest
    }

    #[cfg(test)]
    fn is_running(&self, target: TickTarget) -> bool {
        self.running.contains_key(&target)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.running.len()
    }

    pub fn subscription(&self) -> Subscription<Action> {
        Subscription::batch(self.running.iter().map(|(target, (period, generation))| {
            time::every(*period)
                .with((*target, *generation))
                .map(|((target, generation), _)| Action::Tick { target, generation })
        }))
    }
}
