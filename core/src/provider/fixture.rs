use crate::model::{
    Alert, CameraFeed, DetectedAnimal, Forecast, MetricCard, OperatorProfile, SensorReading,
    SimulationZone, ZoneReport,
};
use crate::prelude::{ShellError, ShellResult};
use crate::provider::{DataProvider, MockProvider};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// JSON snapshot; every section is optional and falls back to the seed data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub sensor_reading: Option<SensorReading>,
    pub recent_alerts: Option<Vec<Alert>>,
    pub alerts: Option<Vec<Alert>>,
    pub camera_feed: Option<CameraFeed>,
    pub detections: Option<Vec<DetectedAnimal>>,
    pub zones: Option<Vec<SimulationZone>>,
    pub metrics: Option<Vec<MetricCard>>,
    pub zone_reports: Option<Vec<ZoneReport>>,
    pub forecast: Option<Forecast>,
    pub profile: Option<OperatorProfile>,
}

/// Provider backed by a snapshot file.
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    snapshot: Snapshot,
    fallback: MockProvider,
}

impl FixtureProvider {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            fallback: MockProvider::new(),
        }
    }

    pub fn from_json(contents: &str) -> ShellResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(contents)
            .map_err(|err| ShellError::Provider(format!("parsing fixture: {err}")))?;
        Ok(Self::new(snapshot))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> ShellResult<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|err| {
            ShellError::Provider(format!("reading fixture {}: {err}", path_ref.display()))
        })?;
        let provider = Self::from_json(&contents)?;
        info!("loaded fixture {}", path_ref.display());
        Ok(provider)
    }
}

impl DataProvider for FixtureProvider {
    fn sensor_reading(&self) -> ShellResult<SensorReading> {
        match &self.snapshot.sensor_reading {
            Some(reading) => Ok(reading.clone()),
            None => self.fallback.sensor_reading(),
        }
    }

    fn recent_alerts(&self) -> ShellResult<Vec<Alert>> {
        match &self.snapshot.recent_alerts {
            Some(alerts) => Ok(alerts.clone()),
            None => self.fallback.recent_alerts(),
        }
    }

    fn alerts(&self) -> ShellResult<Vec<Alert>> {
        match &self.snapshot.alerts {
            Some(alerts) => Ok(alerts.clone()),
            None => self.fallback.alerts(),
        }
    }

    fn camera_feed(&self) -> ShellResult<CameraFeed> {
        match &self.snapshot.camera_feed {
            Some(feed) => Ok(feed.clone()),
            None => self.fallback.camera_feed(),
        }
    }

    fn detections(&self) -> ShellResult<Vec<DetectedAnimal>> {
        match &self.snapshot.detections {
            Some(detections) => Ok(detections.clone()),
            None => self.fallback.detections(),
        }
    }

    fn zones(&self) -> ShellResult<Vec<SimulationZone>> {
        match &self.snapshot.zones {
            Some(zones) => Ok(zones.clone()),
            None => self.fallback.zones(),
        }
    }

    fn metrics(&self) -> ShellResult<Vec<MetricCard>> {
        match &self.snapshot.metrics {
            Some(metrics) => Ok(metrics.clone()),
            None => self.fallback.metrics(),
        }
    }

    fn zone_reports(&self) -> ShellResult<Vec<ZoneReport>> {
        match &self.snapshot.zone_reports {
            Some(reports) => Ok(reports.clone()),
            None => self.fallback.zone_reports(),
        }
    }

    fn forecast(&self) -> ShellResult<Forecast> {
        match &self.snapshot.forecast {
            Some(forecast) => Ok(forecast.clone()),
            None => self.fallback.forecast(),
        }
    }

    fn profile(&self) -> ShellResult<OperatorProfile> {
        match &self.snapshot.profile {
            Some(profile) => Ok(profile.clone()),
            None => self.fallback.profile(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_sections_fall_back_to_seed_data() {
        let provider = FixtureProvider::from_json("{}").unwrap();
        assert_eq!(provider.alerts().unwrap().len(), 4);
        assert_eq!(provider.zones().unwrap().len(), 3);
    }

    #[test]
    fn fixture_file_overrides_alerts() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            r#"{"alerts": [{
                "id": "9",
                "category": "health",
                "title": "t",
                "message": "m",
                "severity": "high",
                "timestamp": "2024-02-01 08:00",
                "location": "구역 C"
            }]}"#
                .as_bytes(),
        )
        .unwrap();
        let path = temp.into_temp_path();
        let provider = FixtureProvider::load(&path).unwrap();
        let alerts = provider.alerts().unwrap();
        assert_eq!(alerts.len(), 1);
        assert!(!alerts[0].resolved);
        assert_eq!(alerts[0].animal_count, None);
        assert_eq!(alerts[0].location, "구역 C");
    }

    #[test]
    fn malformed_fixture_is_a_provider_error() {
        let err = FixtureProvider::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, ShellError::Provider(_)));
    }
}
