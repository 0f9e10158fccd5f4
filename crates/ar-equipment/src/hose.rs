//! Hoses: conveyance segments with a linear friction-loss model.

use ar_core::units::{Length, Pressure, VolumeRate, bar, to_lpm, to_m};

use crate::equipment::{Equipment, EquipmentKind};

/// Kind data for a hose segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Hose {
    /// Friction loss in bar per 100 m of hose per 1000 LPM of flow.
    pub loss_coefficient: f64,
}

impl Hose {
    pub fn new(loss_coefficient: f64) -> Self {
        Self { loss_coefficient }
    }

    /// Linear loss estimate for a segment of `length` carrying `flow`:
    ///
    /// ```text
    /// ΔP = (length_m / 100) * loss_coefficient * (flow_lpm / 1000)   [bar]
    /// ```
    ///
    /// Advisory: nothing subtracts it from the segment's own pressure.
    /// Chain calculations (see `ar-network`) apply it explicitly.
    pub fn pressure_drop(&self, length: Length, flow: VolumeRate) -> Pressure {
        bar((to_m(length) / 100.0) * self.loss_coefficient * (to_lpm(flow) / 1000.0))
    }
}

impl Equipment {
    /// Loss estimate for this hose at its own rated length and flow.
    /// `None` for non-hose equipment.
    pub fn pressure_drop(&self) -> Option<Pressure> {
        match &self.kind {
            EquipmentKind::Hose(h) => Some(h.pressure_drop(self.length, self.flow)),
            _ => None,
        }
    }
}

/// Calibrated loss coefficients per coupling diameter, from field tables.
/// Diameters without a calibrated entry get `None`; catalog tooling warns
/// about them rather than guessing.
pub fn loss_coefficient_for(diameter_mm: u32) -> Option<f64> {
    match diameter_mm {
        38 => Some(0.9),
        45 => Some(0.6),
        65 => Some(0.3),
        75 => Some(0.25),
        100 => Some(0.12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ar_core::numeric::{Tolerances, nearly_equal};
    use ar_core::units::{lpm, m, to_bar};
    use crate::equipment::OPERATIONAL;

    fn hose(length_m: f64, loss: f64, flow_lpm: f64) -> Equipment {
        Equipment {
            uid: "manguera-1".into(),
            label: "Manguera 45mm".into(),
            variant: "manguera".into(),
            health: OPERATIONAL.into(),
            inputs: vec![],
            outputs: vec![],
            length: m(length_m),
            flow: lpm(flow_lpm),
            pressure: bar(8.0),
            kind: EquipmentKind::Hose(Hose::new(loss)),
        }
    }

    #[test]
    fn reference_drop() {
        // 25 m at 0.6 bar/100m/1000LPM carrying 500 LPM: 0.075 bar.
        let h = hose(25.0, 0.6, 500.0);
        let drop = h.pressure_drop().unwrap();
        assert!(nearly_equal(to_bar(drop), 0.075, Tolerances::default()));
    }

    #[test]
    fn zero_length_or_flow_drops_nothing() {
        assert_eq!(hose(0.0, 0.6, 500.0).pressure_drop(), Some(bar(0.0)));
        assert_eq!(hose(25.0, 0.6, 0.0).pressure_drop(), Some(bar(0.0)));
    }

    #[test]
    fn drop_is_hose_only() {
        let source = Equipment {
            kind: EquipmentKind::WaterSource(crate::WaterSource::with_max_outputs(1)),
            ..hose(25.0, 0.6, 500.0)
        };
        assert_eq!(source.pressure_drop(), None);
    }

    #[test]
    fn calibrated_diameters() {
        assert_eq!(loss_coefficient_for(45), Some(0.6));
        assert_eq!(loss_coefficient_for(100), Some(0.12));
        assert_eq!(loss_coefficient_for(52), None);
    }
}
