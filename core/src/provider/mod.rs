//! Data sources feeding the screens.
//!
//! Screens only talk to [`DataProvider`]; the bundled implementations serve
//! seed data ([`MockProvider`]) or a JSON snapshot ([`FixtureProvider`]).

pub mod fixture;
pub mod mock;

use crate::model::{
    Alert, CameraFeed, DetectedAnimal, Forecast, MetricCard, OperatorProfile, SensorReading,
    SimulationZone, ZoneReport,
};
use crate::prelude::ShellResult;

pub use fixture::FixtureProvider;
pub use mock::MockProvider;

pub trait DataProvider: Send + Sync {
    fn sensor_reading(&self) -> ShellResult<SensorReading>;
    /// Short digest for the dashboard.
    fn recent_alerts(&self) -> ShellResult<Vec<Alert>>;
    fn alerts(&self) -> ShellResult<Vec<Alert>>;
    fn camera_feed(&self) -> ShellResult<CameraFeed>;
    fn detections(&self) -> ShellResult<Vec<DetectedAnimal>>;
    fn zones(&self) -> ShellResult<Vec<SimulationZone>>;
    fn metrics(&self) -> ShellResult<Vec<MetricCard>>;
    fn zone_reports(&self) -> ShellResult<Vec<ZoneReport>>;
    fn forecast(&self) -> ShellResult<Forecast>;
    fn profile(&self) -> ShellResult<OperatorProfile>;
}
