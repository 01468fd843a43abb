use crate::model::RiskLevel;

/// Radius growth per simulated hour.
pub const GROWTH_PER_HOUR: u32 = 2;

pub fn base_radius(risk: RiskLevel) -> u32 {
    match risk {
        RiskLevel::High => 30,
        RiskLevel::Medium => 20,
        RiskLevel::Low => 10,
    }
}

/// Displayed spread radius after `hours` simulated hours. Unbounded in `hours`.
pub fn spread_radius(risk: RiskLevel, hours: u32) -> u32 {
    base_radius(risk) + GROWTH_PER_HOUR * hours
}
