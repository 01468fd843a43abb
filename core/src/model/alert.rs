use crate::model::palette::{self, Swatch};
use serde::{Deserialize, Serialize};

/// Title of the behavior alert that links to the CCTV footage.
pub const FOOTAGE_ALERT_TITLE: &str = "비정상적 움직임 감지";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    Behavior,
    Health,
    Environment,
    System,
}

impl AlertCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AlertCategory::Behavior => "행동이상",
            AlertCategory::Health => "건강관리",
            AlertCategory::Environment => "환경",
            AlertCategory::System => "시스템",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "높음",
            Severity::Medium => "보통",
            Severity::Low => "낮음",
        }
    }

    pub fn swatch(&self) -> Swatch {
        match self {
            Severity::High => palette::RED,
            Severity::Medium => palette::AMBER,
            Severity::Low => palette::GREEN,
        }
    }
}

/// Alert record as listed on the alerts tab and the dashboard digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub category: AlertCategory,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub timestamp: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal_count: Option<u32>,
    #[serde(default)]
    pub resolved: bool,
}

impl Alert {
    /// Only the abnormal-movement behavior alert has camera footage attached.
    pub fn opens_footage(&self) -> bool {
        self.category == AlertCategory::Behavior && self.title == FOOTAGE_ALERT_TITLE
    }

    /// Affected animal count, treating zero as absent.
    pub fn affected_animals(&self) -> Option<u32> {
        self.animal_count.filter(|count| *count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(category: AlertCategory, title: &str, animal_count: Option<u32>) -> Alert {
        Alert {
            id: "x".into(),
            category,
            title: title.into(),
            message: String::new(),
            severity: Severity::Low,
            timestamp: String::new(),
            location: String::new(),
            animal_count,
            resolved: false,
        }
    }

    #[test]
    fn footage_requires_behavior_category_and_title() {
        assert!(alert(AlertCategory::Behavior, FOOTAGE_ALERT_TITLE, None).opens_footage());
        assert!(!alert(AlertCategory::Health, FOOTAGE_ALERT_TITLE, None).opens_footage());
        assert!(!alert(AlertCategory::Behavior, "온도 상승 경고", None).opens_footage());
    }

    #[test]
    fn zero_animals_reads_as_absent() {
        assert_eq!(alert(AlertCategory::System, "", Some(0)).affected_animals(), None);
        assert_eq!(alert(AlertCategory::System, "", Some(3)).affected_animals(), Some(3));
    }

    #[test]
    fn category_deserializes_from_snake_case() {
        let parsed: AlertCategory = serde_json::from_str("\"environment\"").unwrap();
        assert_eq!(parsed, AlertCategory::Environment);
    }
}
