//! Linear supply lines: build, validate, and walk.

use ar_core::units::{Pressure, VolumeRate, bar, to_bar, to_lpm};
use ar_equipment::{Equipment, EquipmentKind};

use crate::error::{NetworkError, NetworkResult};

/// Builder for a [`SupplyLine`].
///
/// Push segments in flow order, source first, then call `build()` to
/// validate and freeze the line.
#[derive(Debug, Default)]
pub struct LineBuilder<'a> {
    segments: Vec<&'a Equipment>,
}

impl<'a> LineBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, equipment: &'a Equipment) -> Self {
        self.segments.push(equipment);
        self
    }

    /// Validate and freeze. Rejects empty lines, a head that is not a water
    /// source, out-of-service segments, and consecutive pairs with no
    /// compatible coupling (the `can_connect` conditions, reported apart so
    /// the caller learns which one failed).
    pub fn build(self) -> NetworkResult<SupplyLine<'a>> {
        let head = *self.segments.first().ok_or(NetworkError::EmptyLine)?;
        if head.as_source().is_none() {
            return Err(NetworkError::NotASource {
                uid: head.uid.clone(),
            });
        }
        for segment in &self.segments {
            if !segment.is_operational() {
                return Err(NetworkError::NotOperational {
                    uid: segment.uid.clone(),
                });
            }
        }
        for pair in self.segments.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if from.connectable_outputs(to).is_empty() {
                return Err(NetworkError::NoCompatibleCoupling {
                    from: from.uid.clone(),
                    to: to.uid.clone(),
                });
            }
        }
        Ok(SupplyLine {
            segments: self.segments,
        })
    }
}

/// A validated source → … → terminal run.
#[derive(Debug, Clone)]
pub struct SupplyLine<'a> {
    segments: Vec<&'a Equipment>,
}

/// Outcome of walking a supply line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineReport {
    /// Flow the terminal element asks for.
    pub demand: VolumeRate,
    /// Residual pressure after each segment, head included, in line order.
    pub residuals: Vec<(String, Pressure)>,
    /// Residual pressure at the terminal element.
    pub delivered: Pressure,
    /// Whether the terminal nozzle gets its required pressure; `None` when
    /// the line does not end in a nozzle.
    pub nozzle_ok: Option<bool>,
    pub warnings: Vec<String>,
}

impl<'a> SupplyLine<'a> {
    pub fn segments(&self) -> &[&'a Equipment] {
        &self.segments
    }

    /// Walk the line: start from the source discharge pressure at the
    /// terminal demand, subtract hose losses and accessory losses, clamping
    /// at zero bar. Sources and nozzles along the way subtract nothing.
    ///
    /// Pure query; the walk re-reads current attribute values every call.
    pub fn evaluate(&self) -> LineReport {
        let head = self.segments[0];
        let terminal = self.segments[self.segments.len() - 1];
        let demand = terminal.flow;

        let mut warnings = Vec::new();
        if let Some(available) = head.available_flow() {
            if available < demand {
                warnings.push(format!(
                    "{} delivers {:.0} LPM, line demands {:.0} LPM",
                    head.label,
                    to_lpm(available),
                    to_lpm(demand),
                ));
            }
        }

        let mut pressure = head.supply_pressure(demand).unwrap_or(head.pressure);
        let mut residuals = Vec::with_capacity(self.segments.len());
        residuals.push((head.uid.clone(), pressure));

        for segment in &self.segments[1..] {
            let loss = match &segment.kind {
                EquipmentKind::Hose(h) => h.pressure_drop(segment.length, segment.flow),
                EquipmentKind::Accessory(a) => a.extra_loss,
                EquipmentKind::WaterSource(_) | EquipmentKind::Nozzle(_) => bar(0.0),
            };
            pressure = (pressure - loss).max(bar(0.0));
            residuals.push((segment.uid.clone(), pressure));
        }

        let nozzle_ok = terminal.as_nozzle().map(|n| n.has_enough_pressure(pressure));
        if let Some(false) = nozzle_ok {
            if let Some(nozzle) = terminal.as_nozzle() {
                warnings.push(format!(
                    "insufficient pressure at {}: {:.1} bar < {:.1} bar",
                    terminal.label,
                    to_bar(pressure),
                    to_bar(nozzle.required_pressure),
                ));
            }
        }

        LineReport {
            demand,
            residuals,
            delivered: pressure,
            nozzle_ok,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ar_core::units::{lpm, m};
    use ar_equipment::{Connector, EquipmentBuilder, Hose, Nozzle, WaterSource};

    fn pool() -> Equipment {
        EquipmentBuilder::new(
            "piscina-1",
            "Piscina",
            "piscina",
            EquipmentKind::WaterSource(WaterSource::with_max_outputs(1)),
        )
        .flow(lpm(600.0))
        .pressure(bar(2.0))
        .output(Connector::new("salida-superficie", 65))
        .build()
        .unwrap()
    }

    fn long_hose() -> Equipment {
        EquipmentBuilder::new(
            "manguera-larga",
            "Manguera 38mm x 500m",
            "manguera",
            EquipmentKind::Hose(Hose::new(0.9)),
        )
        .length(m(500.0))
        .flow(lpm(1000.0))
        .pressure(bar(2.0))
        .input(Connector::new("entrada-38", 38))
        .output(Connector::new("salida-38", 38))
        .build()
        .unwrap()
    }

    fn small_nozzle() -> Equipment {
        EquipmentBuilder::new(
            "piton-1",
            "Pitón 38mm",
            "piton",
            EquipmentKind::Nozzle(Nozzle::new(bar(3.5))),
        )
        .flow(lpm(1000.0))
        .pressure(bar(3.5))
        .input(Connector::new("entrada-38", 38))
        .build()
        .unwrap()
    }

    #[test]
    fn empty_line_is_rejected() {
        assert_eq!(LineBuilder::new().build().unwrap_err(), NetworkError::EmptyLine);
    }

    #[test]
    fn head_must_be_a_source() {
        let hose = long_hose();
        let err = LineBuilder::new().push(&hose).build().unwrap_err();
        assert_eq!(
            err,
            NetworkError::NotASource {
                uid: "manguera-larga".into()
            }
        );
    }

    #[test]
    fn residual_clamps_at_zero_and_nozzle_starves() {
        // Pool at 2 bar; 500 m of 38 mm hose at 1000 LPM drops
        // (500/100) * 0.9 * (1000/1000) = 4.5 bar.
        let piscina = pool();
        let manguera = long_hose();
        let piton = small_nozzle();
        let line = LineBuilder::new()
            .push(&piscina)
            .push(&manguera)
            .push(&piton)
            .build()
            .unwrap();

        let report = line.evaluate();
        assert_eq!(report.delivered, bar(0.0));
        assert_eq!(report.nozzle_ok, Some(false));
        // Demand 1000 LPM exceeds the pool's 600 LPM, and the nozzle starves.
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.residuals.len(), 3);
    }
}
