use crate::model::palette::{self, Swatch};
use serde::{Deserialize, Serialize};

/// Environmental snapshot shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub temperature_c: f32,
    pub humidity_pct: u8,
    pub air_quality: u16,
    /// Display string, not a parsed timestamp.
    pub updated_at: String,
}

impl SensorReading {
    pub fn new(temperature_c: f32, humidity_pct: u8, air_quality: u16, updated_at: &str) -> Self {
        Self {
            temperature_c,
            humidity_pct,
            air_quality,
            updated_at: updated_at.to_string(),
        }
    }

    /// Same readings with a fresh update label.
    pub fn touched(&self, updated_at: String) -> Self {
        Self {
            updated_at,
            ..self.clone()
        }
    }
}

/// Overall badge in the dashboard header card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FarmStatus {
    #[default]
    Normal,
    Warning,
    Danger,
}

impl FarmStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FarmStatus::Normal => "정상",
            FarmStatus::Warning => "주의",
            FarmStatus::Danger => "위험",
        }
    }

    pub fn swatch(&self) -> Swatch {
        match self {
            FarmStatus::Normal => palette::GREEN,
            FarmStatus::Warning => palette::AMBER,
            FarmStatus::Danger => palette::RED,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FarmStatus::Normal => "현재 축사 내 모든 지표가 정상 범위입니다",
            FarmStatus::Warning => "일부 지표가 주의 범위에 있습니다",
            FarmStatus::Danger => "즉시 확인이 필요한 지표가 있습니다",
        }
    }
}
