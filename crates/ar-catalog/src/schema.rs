//! Catalog file schema definitions.
//!
//! Plain numbers in natural field units (metres, LPM, bar); conversion into
//! engine quantities happens at assembly time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub equipment: Vec<EquipmentDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EquipmentDef {
    pub uid: String,
    pub label: String,
    pub variant: String,
    #[serde(default = "default_health")]
    pub health: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<ConnectorDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<ConnectorDef>,
    #[serde(default)]
    pub length_m: f64,
    #[serde(default)]
    pub flow_lpm: f64,
    #[serde(default)]
    pub pressure_bar: f64,
    pub kind: KindDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectorDef {
    pub name: String,
    pub diameter_mm: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_variants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum KindDef {
    WaterSource {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        storage_liters: Option<f64>,
        #[serde(default = "default_max_outputs")]
        max_outputs: u32,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        pump_curve: Vec<CurvePointDef>,
    },
    Hose {
        #[serde(default = "default_loss_coefficient")]
        loss_coefficient: f64,
    },
    Nozzle {
        #[serde(default = "default_required_pressure")]
        required_pressure_bar: f64,
    },
    Accessory {
        #[serde(default = "default_extra_loss")]
        extra_loss_bar: f64,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CurvePointDef {
    pub flow_lpm: f64,
    pub pressure_bar: f64,
}

fn default_health() -> String {
    "operational".to_string()
}

fn default_max_outputs() -> u32 {
    2
}

fn default_loss_coefficient() -> f64 {
    0.6
}

fn default_required_pressure() -> f64 {
    3.5
}

fn default_extra_loss() -> f64 {
    0.2
}
