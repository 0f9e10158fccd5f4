//! Nozzles: terminal elements with a minimum working pressure.

use ar_core::units::Pressure;

/// Kind data for a nozzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nozzle {
    /// Minimum inlet pressure for a usable jet.
    pub required_pressure: Pressure,
}

impl Nozzle {
    pub fn new(required_pressure: Pressure) -> Self {
        Self { required_pressure }
    }

    /// Inclusive threshold: an inlet exactly at the requirement is enough.
    pub fn has_enough_pressure(&self, inlet_pressure: Pressure) -> bool {
        inlet_pressure >= self.required_pressure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ar_core::units::bar;

    #[test]
    fn threshold_is_inclusive() {
        let n = Nozzle::new(bar(3.5));
        assert!(n.has_enough_pressure(bar(3.5)));
        assert!(n.has_enough_pressure(bar(4.0)));
        assert!(!n.has_enough_pressure(bar(3.49)));
    }
}
