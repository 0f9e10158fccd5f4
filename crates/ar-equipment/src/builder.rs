//! Validating equipment construction.

use std::collections::HashSet;

use ar_core::numeric::ensure_non_negative;
use ar_core::units::{Length, Pressure, VolumeRate, bar, lpm, m, to_bar, to_liters, to_lpm, to_m};

use crate::connector::Connector;
use crate::equipment::{Equipment, EquipmentKind, OPERATIONAL};
use crate::error::{EquipmentError, EquipmentResult};

/// Builder for a fully-formed [`Equipment`].
///
/// All defaults are explicit: health starts at [`OPERATIONAL`], magnitudes at
/// zero, port lists empty. `build()` is the validation boundary: it rejects
/// non-finite or negative magnitudes, zero connector diameters, and duplicate
/// connector names within a port list. Queries on the built value never
/// re-validate. Callers that want the unchecked behavior can construct
/// `Equipment` directly; its fields are public.
#[derive(Debug, Clone)]
pub struct EquipmentBuilder {
    uid: String,
    label: String,
    variant: String,
    health: String,
    inputs: Vec<Connector>,
    outputs: Vec<Connector>,
    length: Length,
    flow: VolumeRate,
    pressure: Pressure,
    kind: EquipmentKind,
}

impl EquipmentBuilder {
    pub fn new(
        uid: impl Into<String>,
        label: impl Into<String>,
        variant: impl Into<String>,
        kind: EquipmentKind,
    ) -> Self {
        Self {
            uid: uid.into(),
            label: label.into(),
            variant: variant.into(),
            health: OPERATIONAL.to_string(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            length: m(0.0),
            flow: lpm(0.0),
            pressure: bar(0.0),
            kind,
        }
    }

    pub fn health(mut self, health: impl Into<String>) -> Self {
        self.health = health.into();
        self
    }

    pub fn input(mut self, connector: Connector) -> Self {
        self.inputs.push(connector);
        self
    }

    pub fn output(mut self, connector: Connector) -> Self {
        self.outputs.push(connector);
        self
    }

    pub fn length(mut self, length: Length) -> Self {
        self.length = length;
        self
    }

    pub fn flow(mut self, flow: VolumeRate) -> Self {
        self.flow = flow;
        self
    }

    pub fn pressure(mut self, pressure: Pressure) -> Self {
        self.pressure = pressure;
        self
    }

    pub fn build(self) -> EquipmentResult<Equipment> {
        check_magnitude(to_m(self.length), "length must be finite and non-negative")?;
        check_magnitude(to_lpm(self.flow), "flow must be finite and non-negative")?;
        check_magnitude(to_bar(self.pressure), "pressure must be finite and non-negative")?;

        check_port_list(&self.inputs)?;
        check_port_list(&self.outputs)?;
        check_kind(&self.kind)?;

        Ok(Equipment {
            uid: self.uid,
            label: self.label,
            variant: self.variant,
            health: self.health,
            inputs: self.inputs,
            outputs: self.outputs,
            length: self.length,
            flow: self.flow,
            pressure: self.pressure,
            kind: self.kind,
        })
    }
}

fn check_magnitude(v: f64, what: &'static str) -> EquipmentResult<()> {
    ensure_non_negative(v, what)
        .map(|_| ())
        .map_err(|_| EquipmentError::NonPhysical { what })
}

fn check_port_list(connectors: &[Connector]) -> EquipmentResult<()> {
    let mut seen = HashSet::new();
    for c in connectors {
        if c.diameter_mm == 0 {
            return Err(EquipmentError::InvalidArg {
                what: "connector diameter must be positive",
            });
        }
        if !seen.insert(c.name.as_str()) {
            return Err(EquipmentError::DuplicateConnectorName {
                name: c.name.clone(),
            });
        }
    }
    Ok(())
}

fn check_kind(kind: &EquipmentKind) -> EquipmentResult<()> {
    match kind {
        EquipmentKind::WaterSource(s) => {
            if let Some(storage) = s.storage {
                check_magnitude(to_liters(storage), "storage must be finite and non-negative")?;
            }
            if let Some(curve) = &s.pump_curve {
                for point in curve.points() {
                    check_magnitude(to_lpm(point.flow), "pump curve flow must be finite and non-negative")?;
                    check_magnitude(
                        to_bar(point.pressure),
                        "pump curve pressure must be finite and non-negative",
                    )?;
                }
            }
            Ok(())
        }
        EquipmentKind::Hose(h) => {
            check_magnitude(h.loss_coefficient, "loss coefficient must be finite and non-negative")
        }
        EquipmentKind::Nozzle(n) => check_magnitude(
            to_bar(n.required_pressure),
            "required pressure must be finite and non-negative",
        ),
        EquipmentKind::Accessory(a) => check_magnitude(
            to_bar(a.extra_loss),
            "extra loss must be finite and non-negative",
        ),
    }
}
