use crate::model::palette;
use crate::model::{
    Alert, AlertCategory, BehaviorKind, CameraFeed, DetectedAnimal, Forecast, MetricCard,
    OperatorProfile, Position, Projection, RiskLevel, SensorReading, Severity, SimulationZone,
    Trend, ZoneReport, ZoneStatus,
};
use crate::prelude::ShellResult;
use crate::provider::DataProvider;

/// Serves the fixed seed data the shell ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

#[allow(clippy::too_many_arguments)]
fn alert(
    id: &str,
    category: AlertCategory,
    title: &str,
    message: &str,
    severity: Severity,
    timestamp: &str,
    location: &str,
    animal_count: Option<u32>,
    resolved: bool,
) -> Alert {
    Alert {
        id: id.to_string(),
        category,
        title: title.to_string(),
        message: message.to_string(),
        severity,
        timestamp: timestamp.to_string(),
        location: location.to_string(),
        animal_count,
        resolved,
    }
}

fn zone(id: &str, risk: RiskLevel, animal_count: u32, infected_count: u32, x: f32, y: f32) -> SimulationZone {
    SimulationZone {
        id: id.to_string(),
        name: format!("구역 {id}"),
        risk,
        animal_count,
        infected_count,
        position: Position::new(x, y),
    }
}

fn metric(label: &str, value: &str, change: &str, trend: Trend, accent: palette::Swatch) -> MetricCard {
    MetricCard {
        label: label.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        trend,
        accent,
    }
}

fn zone_report(name: &str, status: ZoneStatus, animal_count: u32, avg_temperature_c: f32) -> ZoneReport {
    ZoneReport {
        name: name.to_string(),
        status,
        animal_count,
        avg_temperature_c,
    }
}

fn projection(horizon: &str, animals: u32, share_pct: f32, severity: Severity) -> Projection {
    Projection {
        horizon: horizon.to_string(),
        animals,
        share_pct,
        severity,
    }
}

impl DataProvider for MockProvider {
    fn sensor_reading(&self) -> ShellResult<SensorReading> {
        Ok(SensorReading::new(22.5, 68, 85, "--:--:--"))
    }

    fn recent_alerts(&self) -> ShellResult<Vec<Alert>> {
        Ok(vec![
            alert(
                "recent-1",
                AlertCategory::Behavior,
                "비정상적 움직임",
                "구역 A에서 비정상적 움직임 감지",
                Severity::Medium,
                "14:32",
                "구역 A",
                Some(3),
                false,
            ),
            alert(
                "recent-2",
                AlertCategory::Environment,
                "온도 상승",
                "온도 상승 경고",
                Severity::Low,
                "13:45",
                "구역 B",
                Some(0),
                false,
            ),
        ])
    }

    fn alerts(&self) -> ShellResult<Vec<Alert>> {
        Ok(vec![
            alert(
                "1",
                AlertCategory::Behavior,
                "비정상적 움직임 감지",
                "구역 A에서 돼지들의 비정상적인 집단 행동이 감지되었습니다.",
                Severity::High,
                "2024-01-15 14:32",
                "구역 A",
                Some(5),
                false,
            ),
            alert(
                "2",
                AlertCategory::Environment,
                "온도 상승 경고",
                "축사 내 온도가 설정 범위를 초과했습니다.",
                Severity::Medium,
                "2024-01-15 13:45",
                "구역 B",
                None,
                true,
            ),
            alert(
                "3",
                AlertCategory::Health,
                "건강 이상 의심",
                "AI 분석 결과, 2마리에서 질병 초기 증상이 의심됩니다.",
                Severity::High,
                "2024-01-15 11:22",
                "구역 C",
                Some(2),
                false,
            ),
            alert(
                "4",
                AlertCategory::System,
                "센서 통신 오류",
                "습도 센서 3번에서 통신 오류가 발생했습니다.",
                Severity::Low,
                "2024-01-15 09:15",
                "구역 A",
                None,
                false,
            ),
        ])
    }

    fn camera_feed(&self) -> ShellResult<CameraFeed> {
        Ok(CameraFeed {
            camera_label: "구역 A - 카메라 #01".into(),
            location: "구역 A".into(),
            captured_at: "14:32".into(),
            start_time: "14:32:15".into(),
            risk: RiskLevel::High,
            recommendation: "즉시 격리 및 수의사 진료 필요".into(),
        })
    }

    fn detections(&self) -> ShellResult<Vec<DetectedAnimal>> {
        Ok(vec![
            DetectedAnimal::new("1", 120.0, 80.0, BehaviorKind::Aggressive, 0.89),
            DetectedAnimal::new("2", 200.0, 120.0, BehaviorKind::AbnormalMovement, 0.76),
            DetectedAnimal::new("3", 80.0, 150.0, BehaviorKind::Lethargic, 0.82),
        ])
    }

    fn zones(&self) -> ShellResult<Vec<SimulationZone>> {
        Ok(vec![
            zone("A", RiskLevel::High, 45, 3, 50.0, 80.0),
            zone("B", RiskLevel::Medium, 38, 1, 150.0, 120.0),
            zone("C", RiskLevel::Low, 42, 0, 100.0, 180.0),
        ])
    }

    fn metrics(&self) -> ShellResult<Vec<MetricCard>> {
        Ok(vec![
            metric("건강도", "98.2%", "+2.1%", Trend::Up, palette::GREEN),
            metric("알림 발생", "3건", "-5건", Trend::Down, palette::RED),
            metric("평균 온도", "22.5°C", "+0.3°C", Trend::Up, palette::BLUE),
            metric("평균 습도", "68%", "-2%", Trend::Down, palette::AMBER),
        ])
    }

    fn zone_reports(&self) -> ShellResult<Vec<ZoneReport>> {
        Ok(vec![
            zone_report("구역 A", ZoneStatus::Normal, 45, 22.3),
            zone_report("구역 B", ZoneStatus::Warning, 38, 24.1),
            zone_report("구역 C", ZoneStatus::Normal, 42, 21.8),
        ])
    }

    fn forecast(&self) -> ShellResult<Forecast> {
        Ok(Forecast {
            risk_summary: "확산 위험도: 낮음 (2.3%)".into(),
            affected_summary: "예상 영향 범위: 구역 A 일부 (12마리)".into(),
            outbreak_outlook: "AI 분석 결과, 향후 3일간 질병 발생 확률이 낮습니다.".into(),
            projections: vec![
                projection("현재 감염 추정", 4, 3.2, Severity::Low),
                projection("24시간 후 예상", 12, 9.6, Severity::Medium),
                projection("72시간 후 예상", 28, 22.4, Severity::High),
            ],
            actions: vec![
                "구역 A 즉시 격리 및 소독 실시".into(),
                "구역 B 예방적 소독 권장".into(),
                "전체 구역 모니터링 강화".into(),
                "수의사 긴급 진료 요청".into(),
            ],
        })
    }

    fn profile(&self) -> ShellResult<OperatorProfile> {
        Ok(OperatorProfile {
            name: "김농장".into(),
            role: "농장주".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_alerts_have_one_resolved_record() {
        let alerts = MockProvider::new().alerts().unwrap();
        assert_eq!(alerts.len(), 4);
        let resolved: Vec<_> = alerts.iter().filter(|a| a.resolved).map(|a| a.id.as_str()).collect();
        assert_eq!(resolved, vec!["2"]);
    }

    #[test]
    fn only_the_lowest_risk_zone_is_clean() {
        let zones = MockProvider::new().zones().unwrap();
        let spreading: Vec<_> = zones.iter().filter(|z| z.is_spreading()).map(|z| z.id.as_str()).collect();
        assert_eq!(spreading, vec!["A", "B"]);
    }
}
