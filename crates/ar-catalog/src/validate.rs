//! Catalog validation logic.
//!
//! Structural checks over the raw defs, before any engine value is built:
//! this is where uid uniqueness lives (the engine itself never checks it).

use std::collections::HashSet;

use crate::schema::{Catalog, ConnectorDef, EquipmentDef, KindDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_catalog(catalog: &Catalog) -> Result<(), ValidationError> {
    if catalog.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: catalog.version,
        });
    }

    let mut uids = HashSet::new();
    for def in &catalog.equipment {
        if !uids.insert(&def.uid) {
            return Err(ValidationError::DuplicateId {
                id: def.uid.clone(),
                context: "equipment".to_string(),
            });
        }
        validate_equipment(def)?;
    }

    Ok(())
}

fn validate_equipment(def: &EquipmentDef) -> Result<(), ValidationError> {
    check_magnitude(&def.uid, "length_m", def.length_m)?;
    check_magnitude(&def.uid, "flow_lpm", def.flow_lpm)?;
    check_magnitude(&def.uid, "pressure_bar", def.pressure_bar)?;

    validate_port_list(def, "inputs", &def.inputs)?;
    validate_port_list(def, "outputs", &def.outputs)?;

    match &def.kind {
        KindDef::WaterSource {
            storage_liters,
            pump_curve,
            ..
        } => {
            if let Some(storage) = storage_liters {
                check_magnitude(&def.uid, "storage_liters", *storage)?;
            }
            for (i, point) in pump_curve.iter().enumerate() {
                check_magnitude(&def.uid, &format!("pump_curve[{i}].flow_lpm"), point.flow_lpm)?;
                check_magnitude(
                    &def.uid,
                    &format!("pump_curve[{i}].pressure_bar"),
                    point.pressure_bar,
                )?;
            }
        }
        KindDef::Hose { loss_coefficient } => {
            check_magnitude(&def.uid, "loss_coefficient", *loss_coefficient)?;
        }
        KindDef::Nozzle {
            required_pressure_bar,
        } => {
            check_magnitude(&def.uid, "required_pressure_bar", *required_pressure_bar)?;
        }
        KindDef::Accessory { extra_loss_bar } => {
            check_magnitude(&def.uid, "extra_loss_bar", *extra_loss_bar)?;
        }
    }

    Ok(())
}

fn validate_port_list(
    def: &EquipmentDef,
    context: &str,
    connectors: &[ConnectorDef],
) -> Result<(), ValidationError> {
    let mut names = HashSet::new();
    for connector in connectors {
        if connector.diameter_mm == 0 {
            return Err(ValidationError::InvalidValue {
                field: format!("{}.{}.{}.diameter_mm", def.uid, context, connector.name),
                value: "0".to_string(),
                reason: "diameter must be positive".to_string(),
            });
        }
        if !names.insert(&connector.name) {
            return Err(ValidationError::DuplicateId {
                id: connector.name.clone(),
                context: format!("{} {}", def.uid, context),
            });
        }
    }
    Ok(())
}

fn check_magnitude(uid: &str, field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("{uid}.{field}"),
            value: value.to_string(),
            reason: "must be finite and non-negative".to_string(),
        });
    }
    Ok(())
}
