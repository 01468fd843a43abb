use crate::model::palette::{self, Swatch};
use crate::model::Position;
use serde::{Deserialize, Serialize};

/// Risk label driving zone colors and the base spread radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "위험",
            RiskLevel::Medium => "주의",
            RiskLevel::Low => "정상",
        }
    }

    /// Wording used in summaries ("위험도: 높음").
    pub fn grade(&self) -> &'static str {
        match self {
            RiskLevel::High => "높음",
            RiskLevel::Medium => "보통",
            RiskLevel::Low => "낮음",
        }
    }

    pub fn swatch(&self) -> Swatch {
        match self {
            RiskLevel::High => palette::RED,
            RiskLevel::Medium => palette::AMBER,
            RiskLevel::Low => palette::GREEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationZone {
    pub id: String,
    pub name: String,
    pub risk: RiskLevel,
    pub animal_count: u32,
    pub infected_count: u32,
    /// Top-left corner on the farm layout.
    pub position: Position,
}

impl SimulationZone {
    /// Spread circles are only drawn around zones with suspected infections.
    pub fn is_spreading(&self) -> bool {
        self.infected_count > 0
    }
}
