//! ar-equipment: equipment library for fire-service water-supply networks.
//!
//! Provides the connector-compatibility and equipment-linking engine:
//! - Typed physical couplings ([`Connector`]) with a pairwise compatibility test
//! - A shared equipment base ([`Equipment`]) with operability and linking queries
//! - Four specialized kinds: water sources, hoses, nozzles, and accessories
//!
//! All queries are pure functions of the current attribute values: no I/O, no
//! caching, no shared mutable state. Construction goes through
//! [`EquipmentBuilder`], which is where physical invariants are enforced.
//!
//! # Example
//!
//! ```
//! use ar_core::units::{bar, lpm};
//! use ar_equipment::{Connector, EquipmentBuilder, EquipmentKind, WaterSource, Hose};
//!
//! let engine = EquipmentBuilder::new(
//!     "carro-1",
//!     "Carro bomba",
//!     "carro",
//!     EquipmentKind::WaterSource(WaterSource::with_max_outputs(2)),
//! )
//! .flow(lpm(1500.0))
//! .pressure(bar(10.0))
//! .output(Connector::new("descarga-65", 65))
//! .build()
//! .unwrap();
//!
//! let hose = EquipmentBuilder::new(
//!     "manguera-1",
//!     "Manguera 45mm",
//!     "manguera",
//!     EquipmentKind::Hose(Hose::new(0.6)),
//! )
//! .flow(lpm(500.0))
//! .pressure(bar(8.0))
//! .input(Connector::new("entrada-45", 45))
//! .output(Connector::new("salida-45", 45))
//! .build()
//! .unwrap();
//!
//! assert!(engine.can_connect(&hose));
//! ```

pub mod accessory;
pub mod builder;
pub mod connector;
pub mod equipment;
pub mod error;
pub mod hose;
pub mod nozzle;
pub mod source;

// Re-exports
pub use accessory::Accessory;
pub use builder::EquipmentBuilder;
pub use connector::Connector;
pub use equipment::{Equipment, EquipmentKind, OPERATIONAL};
pub use error::{EquipmentError, EquipmentResult};
pub use hose::{Hose, loss_coefficient_for};
pub use nozzle::Nozzle;
pub use source::{CurvePoint, PumpCurve, WaterSource};
