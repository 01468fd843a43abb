use crate::analysis::AlertFilter;
use crate::clock::WallClock;
use crate::config::ShellConfig;
use crate::navigation::Tab;
use crate::provider::DataProvider;
use crate::screens::settings::Preference;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Common error type for screen and session operations.
#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error("config error: {0}")]
    Config(String),
    #[error("provider error: {0}")]
    Provider(String),
    #[error("runtime unavailable: {0}")]
    Runtime(String),
    #[error("invalid action: {0}")]
    InvalidAction(String),
}

pub type ShellResult<T> = Result<T, ShellError>;

/// Screen that owns a periodic ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickTarget {
    CctvClock,
    SimulationHour,
}

/// Blocking informational notice shown over the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Everything a front end can feed into the session: user intents plus the
/// completions and ticks produced by earlier effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PhoneChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility,
    SubmitLogin,
    LoginCompleted,
    ForgotPassword,
    SignUp,
    SelectTab(Tab),
    ViewAllAlerts,
    OpenSimulation,
    OpenAlert(String),
    Back,
    Refresh,
    RefreshCompleted,
    StartDisinfection,
    DisinfectionCompleted,
    SetAlertFilter(AlertFilter),
    SetPreference(Preference, bool),
    TogglePlayback(TickTarget),
    Tick { target: TickTarget, generation: u64 },
    Rewind,
    SendEmergencyAlert,
    StartIsolation,
    DismissNotice,
}

impl Action {
    /// Intents come from the user and are held back while a notice is open.
    pub fn is_user_intent(&self) -> bool {
        !matches!(
            self,
            Action::LoginCompleted
                | Action::RefreshCompleted
                | Action::DisinfectionCompleted
                | Action::Tick { .. }
                | Action::DismissNotice
        )
    }
}

/// Work the session asks its front end to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notice(Notice),
    /// Dispatch `action` once `delay` has elapsed.
    Schedule { delay: Duration, action: Action },
    /// Start (or restart) the ticker for `target`; every tick must carry `generation`.
    StartTicker {
        target: TickTarget,
        period: Duration,
        generation: u64,
    },
    StopTicker { target: TickTarget },
}

/// Collaborators handed to a screen while it mounts.
pub struct ScreenContext<'a> {
    pub provider: &'a dyn DataProvider,
    pub clock: &'a dyn WallClock,
    pub config: &'a ShellConfig,
    /// Ticker generation reserved for this mount.
    pub generation: u64,
}

/// Lifecycle shared by every screen view-model.
pub trait Screen {
    /// Loads the screen's data and returns the effects it needs running (tickers).
    fn mount(&mut self, ctx: &ScreenContext<'_>) -> ShellResult<Vec<Effect>>;
    /// Releases whatever the screen started; the view-model is dropped afterwards.
    fn unmount(&mut self) -> Vec<Effect>;
}
