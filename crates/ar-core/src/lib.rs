//! ar-core: stable foundation for armada.
//!
//! Contains:
//! - units (uom SI types + constructors for the bar/LPM/meter world)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ArError, ArResult};
pub use numeric::*;
pub use units::*;
