pub mod alert;
pub mod detection;
pub mod palette;
pub mod report;
pub mod sensor;
pub mod zone;

use serde::{Deserialize, Serialize};

pub use alert::{Alert, AlertCategory, Severity};
pub use detection::{BehaviorKind, CameraFeed, DetectedAnimal};
pub use palette::Swatch;
pub use report::{Forecast, MetricCard, OperatorProfile, Projection, Trend, ZoneReport, ZoneStatus};
pub use sensor::{FarmStatus, SensorReading};
pub use zone::{RiskLevel, SimulationZone};

/// Layout position in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
