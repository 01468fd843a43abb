use crate::model::alert::Severity;
use crate::model::palette::{self, Swatch};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

/// Headline number on the analytics tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub accent: Swatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneStatus {
    Normal,
    Warning,
}

impl ZoneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ZoneStatus::Normal => "정상",
            ZoneStatus::Warning => "주의",
        }
    }

    pub fn swatch(&self) -> Swatch {
        match self {
            ZoneStatus::Normal => palette::GREEN,
            ZoneStatus::Warning => palette::AMBER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneReport {
    pub name: String,
    pub status: ZoneStatus,
    pub animal_count: u32,
    pub avg_temperature_c: f32,
}

impl ZoneReport {
    pub fn details(&self) -> String {
        format!(
            "돼지 수: {}마리 | 평균 온도: {:.1}°C",
            self.animal_count, self.avg_temperature_c
        )
    }
}

/// Infection estimate at one horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub horizon: String,
    pub animals: u32,
    pub share_pct: f32,
    pub severity: Severity,
}

impl Projection {
    pub fn summary(&self) -> String {
        format!("{}마리 ({:.1}%)", self.animals, self.share_pct)
    }
}

/// Canned disease-spread outlook used by the dashboard, analytics and simulation screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub risk_summary: String,
    pub affected_summary: String,
    pub outbreak_outlook: String,
    pub projections: Vec<Projection>,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorProfile {
    pub name: String,
    pub role: String,
}
