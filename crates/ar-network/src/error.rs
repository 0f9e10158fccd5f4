//! Network assembly errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Supply line has no segments")]
    EmptyLine,

    #[error("Equipment {uid} is not a water source")]
    NotASource { uid: String },

    #[error("Equipment {uid} is out of service")]
    NotOperational { uid: String },

    #[error("No compatible coupling from {from} to {to}")]
    NoCompatibleCoupling { from: String, to: String },

    #[error("Source {uid} accepts {max} simultaneous lines, {requested} requested")]
    FanoutExceeded {
        uid: String,
        requested: usize,
        max: u32,
    },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
