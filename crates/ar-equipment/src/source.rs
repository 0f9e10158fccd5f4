//! Water sources: pumper trucks, hydrants, pools.

use ar_core::units::{Pressure, Volume, VolumeRate, bar, lpm, to_bar, to_lpm};

use crate::equipment::{Equipment, EquipmentKind};

/// One rated point of a pump characteristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub flow: VolumeRate,
    pub pressure: Pressure,
}

/// Pump characteristic: discharge pressure as a function of delivered flow.
///
/// Points are kept sorted by flow. Interpolation is linear between points and
/// clamps to the first/last point outside the rated range.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpCurve {
    points: Vec<CurvePoint>,
}

impl PumpCurve {
    pub fn new(mut points: Vec<CurvePoint>) -> Self {
        points.sort_by(|a, b| to_lpm(a.flow).total_cmp(&to_lpm(b.flow)));
        Self { points }
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Discharge pressure at `flow`; `None` when the curve has no points.
    pub fn pressure_at(&self, flow: VolumeRate) -> Option<Pressure> {
        let first = self.points.first()?;
        if flow <= first.flow {
            return Some(first.pressure);
        }
        for w in self.points.windows(2) {
            let (a, b) = (w[0], w[1]);
            if flow >= a.flow && flow <= b.flow {
                let (fa, fb) = (to_lpm(a.flow), to_lpm(b.flow));
                let t = if fb > fa {
                    (to_lpm(flow) - fa) / (fb - fa)
                } else {
                    0.0
                };
                let p = to_bar(a.pressure) + t * (to_bar(b.pressure) - to_bar(a.pressure));
                return Some(bar(p));
            }
        }
        self.points.last().map(|p| p.pressure)
    }
}

/// Kind data for a water source.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterSource {
    /// Stored water, when the source is a tank or a pool. `None` for mains.
    pub storage: Option<Volume>,
    /// How many downstream lines the source physically accepts at once.
    /// Declarative: enforcement belongs to whoever assembles a network
    /// (see `ar-network`), not to the pairwise queries.
    pub max_outputs: u32,
    /// Pump characteristic, when the source has a pump.
    pub pump_curve: Option<PumpCurve>,
}

impl WaterSource {
    pub fn with_max_outputs(max_outputs: u32) -> Self {
        Self {
            storage: None,
            max_outputs,
            pump_curve: None,
        }
    }

    pub fn storage(mut self, storage: Volume) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn pump_curve(mut self, curve: PumpCurve) -> Self {
        self.pump_curve = Some(curve);
        self
    }
}

impl Equipment {
    /// Flow the source can currently contribute: the rated flow when
    /// operational, zero otherwise. `None` for non-source equipment.
    pub fn available_flow(&self) -> Option<VolumeRate> {
        match &self.kind {
            EquipmentKind::WaterSource(_) => Some(if self.is_operational() {
                self.flow
            } else {
                lpm(0.0)
            }),
            _ => None,
        }
    }

    /// Discharge pressure when asked to deliver `demand`: pump-curve
    /// interpolation when a curve is present, the rated pressure otherwise.
    /// `None` for non-source equipment.
    pub fn supply_pressure(&self, demand: VolumeRate) -> Option<Pressure> {
        let source = self.as_source()?;
        Some(
            source
                .pump_curve
                .as_ref()
                .and_then(|curve| curve.pressure_at(demand))
                .unwrap_or(self.pressure),
        )
    }
}
