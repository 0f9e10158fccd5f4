//! Error types for equipment construction.

use ar_core::ArError;
use thiserror::Error;

/// Errors raised at the equipment construction boundary.
///
/// Queries on already-built equipment are total and never return these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquipmentError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Duplicate connector name in port list: {name}")]
    DuplicateConnectorName { name: String },
}

pub type EquipmentResult<T> = Result<T, EquipmentError>;

impl From<EquipmentError> for ArError {
    fn from(e: EquipmentError) -> Self {
        match e {
            EquipmentError::NonPhysical { what } => ArError::InvalidArg { what },
            EquipmentError::InvalidArg { what } => ArError::InvalidArg { what },
            EquipmentError::DuplicateConnectorName { .. } => ArError::Invariant {
                what: "duplicate connector name in port list",
            },
        }
    }
}
