use crate::model::palette::{self, Swatch};
use crate::model::zone::RiskLevel;
use crate::model::Position;
use serde::{Deserialize, Serialize};

/// Behavior class attached to a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorKind {
    Aggressive,
    Lethargic,
    AbnormalMovement,
}

impl BehaviorKind {
    pub fn label(&self) -> &'static str {
        match self {
            BehaviorKind::Aggressive => "공격적 행동",
            BehaviorKind::Lethargic => "무기력 상태",
            BehaviorKind::AbnormalMovement => "비정상 움직임",
        }
    }

    pub fn swatch(&self) -> Swatch {
        match self {
            BehaviorKind::Aggressive => palette::RED,
            BehaviorKind::Lethargic => palette::AMBER,
            BehaviorKind::AbnormalMovement => palette::VIOLET,
        }
    }
}

/// Mock detection overlaid on the CCTV frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedAnimal {
    pub id: String,
    /// Top-left corner of the box in frame pixels.
    pub position: Position,
    pub behavior: BehaviorKind,
    pub confidence: f32,
}

impl DetectedAnimal {
    pub fn new(id: &str, x: f32, y: f32, behavior: BehaviorKind, confidence: f32) -> Self {
        Self {
            id: id.to_string(),
            position: Position::new(x, y),
            behavior,
            confidence,
        }
    }

    pub fn confidence_pct(&self) -> u32 {
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u32
    }

    pub fn caption(&self) -> String {
        format!("{} ({}%)", self.behavior.label(), self.confidence_pct())
    }
}

/// Camera the CCTV screen is attached to, with the fixed summary shown under the frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraFeed {
    pub camera_label: String,
    pub location: String,
    pub captured_at: String,
    /// Clock value shown before the first tick.
    pub start_time: String,
    pub risk: RiskLevel,
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_rounds_to_whole_percent() {
        let detection = DetectedAnimal::new("1", 120.0, 80.0, BehaviorKind::Aggressive, 0.886);
        assert_eq!(detection.confidence_pct(), 89);
        assert_eq!(detection.caption(), "공격적 행동 (89%)");
    }
}
