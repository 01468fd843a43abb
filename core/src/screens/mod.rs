pub mod alerts;
pub mod analytics;
pub mod cctv;
pub mod dashboard;
pub mod login;
pub mod settings;
pub mod simulation;

pub use alerts::AlertsScreen;
pub use analytics::AnalyticsScreen;
pub use cctv::CctvScreen;
pub use dashboard::DashboardScreen;
pub use login::LoginScreen;
pub use settings::{Preference, Preferences, SettingsScreen};
pub use simulation::SimulationScreen;
