//! Assembly of raw defs into engine equipment.

use ar_core::units::{bar, liters, lpm, m};
use ar_equipment::{
    Accessory, Connector, CurvePoint, Equipment, EquipmentBuilder, EquipmentKind, Hose, Nozzle,
    PumpCurve, WaterSource,
};

use crate::CatalogResult;
use crate::schema::{Catalog, ConnectorDef, EquipmentDef, KindDef};
use crate::validate::validate_catalog;

/// Validate a catalog and build every def into an [`Equipment`] instance,
/// preserving catalog order.
pub fn assemble(catalog: &Catalog) -> CatalogResult<Vec<Equipment>> {
    validate_catalog(catalog)?;
    catalog.equipment.iter().map(assemble_equipment).collect()
}

fn assemble_equipment(def: &EquipmentDef) -> CatalogResult<Equipment> {
    let kind = match &def.kind {
        KindDef::WaterSource {
            storage_liters,
            max_outputs,
            pump_curve,
        } => {
            let mut source = WaterSource::with_max_outputs(*max_outputs);
            if let Some(storage) = storage_liters {
                source = source.storage(liters(*storage));
            }
            if !pump_curve.is_empty() {
                source = source.pump_curve(PumpCurve::new(
                    pump_curve
                        .iter()
                        .map(|p| CurvePoint {
                            flow: lpm(p.flow_lpm),
                            pressure: bar(p.pressure_bar),
                        })
                        .collect(),
                ));
            }
            EquipmentKind::WaterSource(source)
        }
        KindDef::Hose { loss_coefficient } => EquipmentKind::Hose(Hose::new(*loss_coefficient)),
        KindDef::Nozzle {
            required_pressure_bar,
        } => EquipmentKind::Nozzle(Nozzle::new(bar(*required_pressure_bar))),
        KindDef::Accessory { extra_loss_bar } => {
            EquipmentKind::Accessory(Accessory::new(bar(*extra_loss_bar)))
        }
    };

    let mut builder = EquipmentBuilder::new(
        def.uid.clone(),
        def.label.clone(),
        def.variant.clone(),
        kind,
    )
    .health(def.health.clone())
    .length(m(def.length_m))
    .flow(lpm(def.flow_lpm))
    .pressure(bar(def.pressure_bar));

    for connector in &def.inputs {
        builder = builder.input(assemble_connector(connector));
    }
    for connector in &def.outputs {
        builder = builder.output(assemble_connector(connector));
    }

    Ok(builder.build()?)
}

fn assemble_connector(def: &ConnectorDef) -> Connector {
    Connector::with_variants(
        def.name.clone(),
        def.diameter_mm,
        def.allowed_variants.iter().cloned(),
    )
}
