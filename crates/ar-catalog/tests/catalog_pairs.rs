//! End-to-end: the built-in catalog, assembled, answers the hand-computed
//! linking matrix.

use ar_catalog::{assemble, builtin_catalog};
use ar_core::numeric::{Tolerances, nearly_equal};
use ar_core::units::to_bar;
use ar_equipment::Equipment;
use ar_network::LineBuilder;

fn fleet() -> Vec<Equipment> {
    assemble(&builtin_catalog()).unwrap()
}

fn by_uid<'a>(fleet: &'a [Equipment], uid: &str) -> &'a Equipment {
    fleet
        .iter()
        .find(|e| e.uid == uid)
        .unwrap_or_else(|| panic!("missing {uid}"))
}

#[test]
fn linking_matrix_matches_hand_computation() {
    let fleet = fleet();
    let can = |from: &str, to: &str| by_uid(&fleet, from).can_connect(by_uid(&fleet, to));

    // Unrestricted discharges couple regardless of diameter.
    assert!(can("carro-1", "manguera-1"));
    assert!(can("piscina-1", "manguera-1"));
    assert!(can("manguera-1", "piton-1"));

    // Equal diameters.
    assert!(can("grifo-1", "manguera-65-1"));
    assert!(can("carro-1", "manguera-65-1"));
    assert!(can("manguera-65-1", "reduccion-1"));
    assert!(can("divisor-1", "manguera-1"));

    // Allow-list: the reducer output lists "entrada-45" only.
    assert!(can("reduccion-1", "manguera-1"));
    assert!(!can("reduccion-1", "piton-1"));
    assert!(can("reduccion-1", "manguera-65-1")); // equal diameter wins anyway

    // No inputs on sources, no outputs on nozzles.
    assert!(!can("manguera-1", "carro-1"));
    assert!(!can("piton-1", "manguera-1"));

    // Health gates both sides.
    assert!(!can("carro-1", "manguera-rota-1"));
    assert!(!can("manguera-rota-1", "piton-1"));
}

#[test]
fn splitter_offers_both_discharges() {
    let fleet = fleet();
    let outs = by_uid(&fleet, "divisor-1").connectable_outputs(by_uid(&fleet, "manguera-1"));
    let names: Vec<_> = outs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["salida-45-a", "salida-45-b"]);
}

#[test]
fn describe_matches_template() {
    let fleet = fleet();
    assert_eq!(
        by_uid(&fleet, "carro-1").describe(),
        "Carro bomba (carro) 1500 LPM @ 10 bar"
    );
    assert_eq!(
        by_uid(&fleet, "piton-1").describe(),
        "Pitón 38mm (piton) 500 LPM @ 3.5 bar"
    );
}

#[test]
fn attack_line_from_catalog_data() {
    let fleet = fleet();
    let line = LineBuilder::new()
        .push(by_uid(&fleet, "carro-1"))
        .push(by_uid(&fleet, "manguera-1"))
        .push(by_uid(&fleet, "piton-1"))
        .build()
        .unwrap();
    let report = line.evaluate();

    // Pump curve at 500 LPM: 10 bar; hose drop 0.075 bar.
    assert!(nearly_equal(to_bar(report.delivered), 9.925, Tolerances::default()));
    assert_eq!(report.nozzle_ok, Some(true));
    assert!(report.warnings.is_empty());
}
