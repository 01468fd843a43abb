//! Core of the smart pig-farm monitoring shell.
//!
//! Screens are plain view-models driven by a [`session::Session`]; anything
//! time-based is returned as an [`prelude::Effect`] for the front end to run,
//! using [`clock::Ticker`] or its own timers.

pub mod analysis;
pub mod clock;
pub mod config;
pub mod model;
pub mod navigation;
pub mod prelude;
pub mod provider;
pub mod screens;
pub mod session;
pub mod telemetry;

pub use config::ShellConfig;
pub use navigation::{Route, Tab};
pub use prelude::{Action, Effect, Notice, Screen, ShellError, ShellResult, TickTarget};
pub use session::Session;
