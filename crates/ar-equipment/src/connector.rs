//! Physical couplings on a piece of equipment.

/// A typed physical port: a hose coupling, a pump discharge, a nozzle inlet.
///
/// Immutable once built into an equipment's port list. `name` identifies the
/// port within that list; `diameter_mm` is the primary compatibility key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    pub name: String,
    /// Coupling diameter in millimetres. Always positive on built equipment.
    pub diameter_mm: u32,
    /// Allow-list of counterpart port names that couple despite a diameter
    /// mismatch (adapters). Empty means no restriction declared: the port
    /// couples with any counterpart.
    pub allowed_variants: Vec<String>,
}

impl Connector {
    /// Port with no allow-list restriction.
    pub fn new(name: impl Into<String>, diameter_mm: u32) -> Self {
        Self {
            name: name.into(),
            diameter_mm,
            allowed_variants: Vec::new(),
        }
    }

    /// Port restricted to the named counterparts (plus equal diameters).
    pub fn with_variants<I, S>(name: impl Into<String>, diameter_mm: u32, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            diameter_mm,
            allowed_variants: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Pairwise compatibility test, evaluated from `self`'s side.
    ///
    /// True iff the diameters are equal, or `self` declares no allow-list,
    /// or `other`'s name appears in `self`'s allow-list. The reverse call
    /// may answer differently; callers must pick a side and stick to it
    /// (the linking engine always asks from the output connector).
    pub fn is_compatible_with(&self, other: &Connector) -> bool {
        self.diameter_mm == other.diameter_mm
            || self.allowed_variants.is_empty()
            || self.allowed_variants.iter().any(|v| v == &other.name)
    }
}
