//! Built-in example catalog.
//!
//! A programmatic catalog mirroring a typical municipal fire company: pumper
//! trucks, a hydrant, a pool, attack and supply hoses, a nozzle, and two
//! fittings. Used by tests and as the CLI default when no file is given.

use crate::schema::{Catalog, ConnectorDef, CurvePointDef, EquipmentDef, KindDef};

fn connector(name: &str, diameter_mm: u32) -> ConnectorDef {
    ConnectorDef {
        name: name.to_string(),
        diameter_mm,
        allowed_variants: vec![],
    }
}

fn restricted(name: &str, diameter_mm: u32, allowed: &[&str]) -> ConnectorDef {
    ConnectorDef {
        name: name.to_string(),
        diameter_mm,
        allowed_variants: allowed.iter().map(|s| s.to_string()).collect(),
    }
}

fn def(uid: &str, label: &str, variant: &str, kind: KindDef) -> EquipmentDef {
    EquipmentDef {
        uid: uid.to_string(),
        label: label.to_string(),
        variant: variant.to_string(),
        health: "operational".to_string(),
        inputs: vec![],
        outputs: vec![],
        length_m: 0.0,
        flow_lpm: 0.0,
        pressure_bar: 0.0,
        kind,
    }
}

pub fn builtin_catalog() -> Catalog {
    let mut equipment = Vec::new();

    let mut carro = def(
        "carro-1",
        "Carro bomba",
        "carro",
        KindDef::WaterSource {
            storage_liters: None,
            max_outputs: 2,
            pump_curve: vec![
                CurvePointDef {
                    flow_lpm: 500.0,
                    pressure_bar: 10.0,
                },
                CurvePointDef {
                    flow_lpm: 1500.0,
                    pressure_bar: 8.0,
                },
            ],
        },
    );
    carro.flow_lpm = 1500.0;
    carro.pressure_bar = 10.0;
    carro.outputs = vec![connector("descarga-65", 65)];
    equipment.push(carro);

    let mut rural = def(
        "carro-rural-1",
        "Carro rural 1000 gpm",
        "carro",
        KindDef::WaterSource {
            storage_liters: Some(4000.0),
            max_outputs: 2,
            pump_curve: vec![],
        },
    );
    rural.flow_lpm = 1000.0;
    rural.pressure_bar = 8.0;
    rural.outputs = vec![connector("descarga-65", 65)];
    equipment.push(rural);

    let mut grifo = def(
        "grifo-1",
        "Grifo",
        "grifo",
        KindDef::WaterSource {
            storage_liters: None,
            max_outputs: 1,
            pump_curve: vec![],
        },
    );
    grifo.flow_lpm = 800.0;
    grifo.pressure_bar = 6.0;
    grifo.outputs = vec![connector("salida-65", 65)];
    equipment.push(grifo);

    let mut piscina = def(
        "piscina-1",
        "Piscina",
        "piscina",
        KindDef::WaterSource {
            storage_liters: Some(20_000.0),
            max_outputs: 2,
            pump_curve: vec![],
        },
    );
    piscina.flow_lpm = 600.0;
    piscina.pressure_bar = 2.0;
    piscina.outputs = vec![connector("salida-superficie", 65)];
    equipment.push(piscina);

    let mut manguera = def(
        "manguera-1",
        "Manguera 45mm",
        "manguera",
        KindDef::Hose {
            loss_coefficient: 0.6,
        },
    );
    manguera.length_m = 25.0;
    manguera.flow_lpm = 500.0;
    manguera.pressure_bar = 8.0;
    manguera.inputs = vec![connector("entrada-45", 45)];
    manguera.outputs = vec![connector("salida-45", 45)];
    equipment.push(manguera);

    let mut manguera_65 = def(
        "manguera-65-1",
        "Manguera 65mm",
        "manguera",
        KindDef::Hose {
            loss_coefficient: 0.3,
        },
    );
    manguera_65.length_m = 25.0;
    manguera_65.flow_lpm = 1000.0;
    manguera_65.pressure_bar = 8.0;
    manguera_65.inputs = vec![connector("entrada-65", 65)];
    manguera_65.outputs = vec![connector("salida-65", 65)];
    equipment.push(manguera_65);

    let mut rota = def(
        "manguera-rota-1",
        "Manguera 45mm (fuera de servicio)",
        "manguera",
        KindDef::Hose {
            loss_coefficient: 0.6,
        },
    );
    rota.health = "dañado".to_string();
    rota.length_m = 25.0;
    rota.flow_lpm = 500.0;
    rota.pressure_bar = 8.0;
    rota.inputs = vec![connector("entrada-45", 45)];
    rota.outputs = vec![connector("salida-45", 45)];
    equipment.push(rota);

    let mut piton = def(
        "piton-1",
        "Pitón 38mm",
        "piton",
        KindDef::Nozzle {
            required_pressure_bar: 3.5,
        },
    );
    piton.flow_lpm = 500.0;
    piton.pressure_bar = 3.5;
    piton.inputs = vec![connector("entrada-38", 38)];
    equipment.push(piton);

    let mut divisor = def(
        "divisor-1",
        "Divisor",
        "accesorio",
        KindDef::Accessory { extra_loss_bar: 0.2 },
    );
    divisor.flow_lpm = 500.0;
    divisor.pressure_bar = 3.0;
    divisor.inputs = vec![connector("entrada-65", 65)];
    divisor.outputs = vec![connector("salida-45-a", 45), connector("salida-45-b", 45)];
    equipment.push(divisor);

    let mut reduccion = def(
        "reduccion-1",
        "Reducción Storz 65-45",
        "accesorio",
        KindDef::Accessory { extra_loss_bar: 0.1 },
    );
    reduccion.flow_lpm = 800.0;
    reduccion.pressure_bar = 5.0;
    reduccion.inputs = vec![connector("entrada-65", 65)];
    reduccion.outputs = vec![restricted("salida-65-45", 65, &["entrada-45"])];
    equipment.push(reduccion);

    Catalog {
        version: crate::LATEST_VERSION,
        name: "Compañía de ejemplo".to_string(),
        equipment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_catalog;

    #[test]
    fn builtin_is_valid() {
        validate_catalog(&builtin_catalog()).unwrap();
    }

    #[test]
    fn builtin_has_every_kind() {
        let catalog = builtin_catalog();
        let has = |f: fn(&KindDef) -> bool| catalog.equipment.iter().any(|d| f(&d.kind));
        assert!(has(|k| matches!(k, KindDef::WaterSource { .. })));
        assert!(has(|k| matches!(k, KindDef::Hose { .. })));
        assert!(has(|k| matches!(k, KindDef::Nozzle { .. })));
        assert!(has(|k| matches!(k, KindDef::Accessory { .. })));
    }
}
