//! Accessories: splitters, reducers, gate valves and other fittings.

use ar_core::units::Pressure;

/// Kind data for a fitting.
///
/// `extra_loss` is a declared static loss. The core never applies it; the
/// supply-line walk in `ar-network` subtracts it when the fitting sits in a
/// chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accessory {
    pub extra_loss: Pressure,
}

impl Accessory {
    pub fn new(extra_loss: Pressure) -> Self {
        Self { extra_loss }
    }
}
