pub const HOURS_PER_CYCLE: u8 = 24;

/// Hour counter advanced by the simulation ticker, wrapping at 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulatedHour(u8);

impl SimulatedHour {
    pub fn new(hour: u8) -> Self {
        Self(hour % HOURS_PER_CYCLE)
    }

    /// Counter value after `ticks` advances from zero.
    pub fn after(ticks: u64) -> Self {
        Self((ticks % u64::from(HOURS_PER_CYCLE)) as u8)
    }

    pub fn advance(&mut self) {
        self.0 = (self.0 + 1) % HOURS_PER_CYCLE;
    }

    pub fn value(&self) -> u32 {
        u32::from(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_n_times_lands_on_n_mod_24() {
        for n in [0u64, 1, 23, 24, 25, 47, 100] {
            let mut hour = SimulatedHour::default();
            for _ in 0..n {
                hour.advance();
            }
            assert_eq!(u64::from(hour.value()), n % 24);
            assert_eq!(hour, SimulatedHour::after(n));
        }
    }

    #[test]
    fn wraps_silently() {
        let mut hour = SimulatedHour::new(23);
        hour.advance();
        assert_eq!(hour.value(), 0);
    }
}
