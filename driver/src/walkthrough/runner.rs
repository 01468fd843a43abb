use crate::render::text;
use crate::script::{Script, Step};
use anyhow::Context;
use log::{debug, info, warn};
use pigcare_core::clock::{Ticker, TimerSlot};
use pigcare_core::{Action, Effect, Session, ShellError, TickTarget};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{self, Instant};

/// Plays a [`Script`] against a live [`Session`], running its effects on tokio.
pub struct Runner {
    session: Session,
    events_tx: UnboundedSender<Action>,
    events_rx: UnboundedReceiver<Action>,
    timers: HashMap<TickTarget, TimerSlot>,
    transcript: Vec<String>,
    echo: bool,
}

impl Runner {
    pub fn new(session: Session) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            session,
            events_tx,
            events_rx,
            timers: HashMap::new(),
            transcript: Vec::new(),
            echo: false,
        }
    }

    /// Prints transcript lines to stdout as they are produced.
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    fn transcript(&self) -> &[String] {
        &self.transcript
    }

    #[cfg(test)]
    fn running_timers(&self) -> usize {
        self.timers.values().filter(|slot| slot.is_running()).count()
    }

    /// Carries out effects returned by `Session::launch`.
    pub fn start(&mut self, effects: Vec<Effect>) -> anyhow::Result<()> {
        self.apply_effects(effects)
    }

    pub async fn run(&mut self, script: &Script) -> anyhow::Result<()> {
        if let Some(name) = &script.name {
            info!("running walkthrough '{}' ({} steps)", name, script.steps.len());
        }
        for (index, step) in script.steps.iter().enumerate() {
            self.perform(step)
                .await
                .with_context(|| format!("step {} ({step:?})", index + 1))?;
        }
        Ok(())
    }

    pub async fn perform(&mut self, step: &Step) -> anyhow::Result<()> {
        debug!("step {:?}", step);
        for action in step.actions() {
            self.dispatch(action)?;
        }
        match step {
            Step::Wait { .. } => {
                let pause = step.pause().unwrap_or_default();
                self.settle(pause).await?;
            }
            Step::Render => {
                let frame = text::render(&self.session);
                for line in frame {
                    self.emit(line);
                }
            }
            _ => self.drain()?,
        }
        Ok(())
    }

    /// Feeds every event that arrives before `duration` elapses back into the session.
    pub async fn settle(&mut self, duration: Duration) -> anyhow::Result<()> {
        let deadline = Instant::now() + duration;
        loop {
            tokio::select! {
                _ = time::sleep_until(deadline) => break,
                event = self.events_rx.recv() => match event {
                    Some(action) => self.dispatch(action)?,
                    None => break,
                },
            }
        }
        self.drain()
    }

    /// Stops every ticker and hands back the transcript.
    pub fn finish(mut self) -> Vec<String> {
        for slot in self.timers.values_mut() {
            slot.clear();
        }
        let metrics = self.session.metrics();
        let summary = format!(
            "navigations={} ticks={} stale_ticks={} notices={}",
            metrics.navigations, metrics.ticks, metrics.stale_ticks, metrics.notices
        );
        self.emit(summary);
        self.transcript
    }

    fn drain(&mut self) -> anyhow::Result<()> {
        while let Ok(action) = self.events_rx.try_recv() {
            self.dispatch(action)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, action: Action) -> anyhow::Result<()> {
        match self.session.dispatch(action) {
            Ok(effects) => self.apply_effects(effects),
            Err(ShellError::InvalidAction(reason)) => {
                warn!("ignored action: {}", reason);
                self.emit(format!("! {reason}"));
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> anyhow::Result<()> {
        for effect in effects {
            match effect {
                Effect::Notice(notice) => {
                    self.emit(format!("[{}] {}", notice.title, notice.body));
                }
                Effect::Schedule { delay, action } => {
                    let tx = self.events_tx.clone();
                    tokio::spawn(async move {
                        time::sleep(delay).await;
                        let _ = tx.send(action);
                    });
                }
                Effect::StartTicker {
                    target,
                    period,
                    generation,
                } => {
                    let tx = self.events_tx.clone();
                    let handle = Ticker::spawn(period, move || {
                        let _ = tx.send(Action::Tick { target, generation });
                    })
                    .with_context(|| format!("starting {target:?} ticker"))?;
                    self.timers.entry(target).or_default().install(handle);
                }
                Effect::StopTicker { target } => {
                    if let Some(slot) = self.timers.get_mut(&target) {
                        slot.clear();
                    }
                }
            }
        }
        Ok(())
    }

    fn emit(&mut self, line: String) {
        if self.echo {
            println!("{line}");
        }
        self.transcript.push(line);
    }
}
