//! ar-network: supply-line assembly over the pure equipment queries.
//!
//! The equipment engine answers pairwise questions; this crate strings
//! equipment into a linear supply line (source → hoses/fittings → nozzle),
//! validates every coupling, and walks the line applying the advisory losses
//! the core deliberately never applies itself.
//!
//! Arbitrary-graph topology solving stays out of scope; the only assembly is
//! the linear run plus the source fan-out check.
//!
//! # Example
//!
//! ```
//! use ar_core::units::{bar, lpm, m};
//! use ar_equipment::{Connector, EquipmentBuilder, EquipmentKind, Hose, WaterSource};
//! use ar_network::LineBuilder;
//!
//! let carro = EquipmentBuilder::new(
//!     "carro-1", "Carro bomba", "carro",
//!     EquipmentKind::WaterSource(WaterSource::with_max_outputs(2)),
//! )
//! .flow(lpm(1500.0))
//! .pressure(bar(10.0))
//! .output(Connector::new("descarga-65", 65))
//! .build()
//! .unwrap();
//!
//! let manguera = EquipmentBuilder::new(
//!     "manguera-1", "Manguera 45mm", "manguera",
//!     EquipmentKind::Hose(Hose::new(0.6)),
//! )
//! .length(m(25.0))
//! .flow(lpm(500.0))
//! .pressure(bar(8.0))
//! .input(Connector::new("entrada-45", 45))
//! .output(Connector::new("salida-45", 45))
//! .build()
//! .unwrap();
//!
//! let line = LineBuilder::new().push(&carro).push(&manguera).build().unwrap();
//! let report = line.evaluate();
//! assert!(report.warnings.is_empty());
//! ```

pub mod error;
pub mod junction;
pub mod line;

// Re-exports for ergonomics
pub use error::{NetworkError, NetworkResult};
pub use junction::validate_fanout;
pub use line::{LineBuilder, LineReport, SupplyLine};
