//! Shared equipment base and the pairwise linking queries.

use core::fmt;

use ar_core::units::{Length, Pressure, VolumeRate, to_bar, to_lpm};

use crate::accessory::Accessory;
use crate::connector::Connector;
use crate::hose::Hose;
use crate::nozzle::Nozzle;
use crate::source::WaterSource;

/// The single health value that permits connections and flow contribution.
/// Any other string (damaged, in maintenance, unknown) reads as out of
/// service; there is no enumerated health taxonomy.
pub const OPERATIONAL: &str = "operational";

/// Kind-specific data, closed over the four equipment families.
#[derive(Debug, Clone, PartialEq)]
pub enum EquipmentKind {
    WaterSource(WaterSource),
    Hose(Hose),
    Nozzle(Nozzle),
    Accessory(Accessory),
}

/// A piece of water-supply equipment: common physical record plus kind data.
///
/// Instances are built fully formed (see [`crate::EquipmentBuilder`]) and are
/// consumed read-only by the linking queries. No live graph of connections is
/// kept; every query recomputes from the current attribute values.
#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    /// Globally unique identifier. Uniqueness is the data provider's duty.
    pub uid: String,
    pub label: String,
    /// Category tag ("manguera", "piton", ...), also usable as an allow-list
    /// token on counterpart connectors.
    pub variant: String,
    pub health: String,
    pub inputs: Vec<Connector>,
    pub outputs: Vec<Connector>,
    pub length: Length,
    pub flow: VolumeRate,
    pub pressure: Pressure,
    pub kind: EquipmentKind,
}

impl Equipment {
    pub fn is_operational(&self) -> bool {
        self.health == OPERATIONAL
    }

    /// Output connectors that couple with at least one input of `target`.
    ///
    /// Walks `self.outputs` in order, testing each against `target.inputs`
    /// in order; an output appears at most once however many inputs it
    /// matches. Empty when either port list is empty.
    pub fn connectable_outputs<'a>(&'a self, target: &Equipment) -> Vec<&'a Connector> {
        self.outputs
            .iter()
            .filter(|out| target.inputs.iter().any(|inp| out.is_compatible_with(inp)))
            .collect()
    }

    /// The authoritative join-feasibility check: both sides operational and
    /// at least one output of `self` couples with an input of `target`.
    /// Pure query, no side effects.
    pub fn can_connect(&self, target: &Equipment) -> bool {
        self.is_operational() && target.is_operational() && !self.connectable_outputs(target).is_empty()
    }

    /// Fixed-template one-line summary, e.g. `Carro bomba (carro) 1500 LPM @ 10 bar`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn as_source(&self) -> Option<&WaterSource> {
        match &self.kind {
            EquipmentKind::WaterSource(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_hose(&self) -> Option<&Hose> {
        match &self.kind {
            EquipmentKind::Hose(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_nozzle(&self) -> Option<&Nozzle> {
        match &self.kind {
            EquipmentKind::Nozzle(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_accessory(&self) -> Option<&Accessory> {
        match &self.kind {
            EquipmentKind::Accessory(a) => Some(a),
            _ => None,
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} LPM @ {} bar",
            self.label,
            self.variant,
            snap(to_lpm(self.flow)),
            snap(to_bar(self.pressure)),
        )
    }
}

// LPM→SI→LPM round-trips carry float noise (L/min is not exactly
// representable in m³/s); displayed values snap to 1e-6.
fn snap(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}
