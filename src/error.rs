use thiserror::Error;

use crate::Pos;

#[derive(Debug, Error)]
pub enum LifeError {
    /// a seed cell is too far from the origin for its neighbors to be addressable.
    #[error("cell {0:?} lies outside of the playable plane")]
    OutOfBounds(Pos),

    #[error("invalid value for {arg}: {reason}")]
    InvalidArgument { arg: String, reason: String },

    #[error("missing value after {0}")]
    MissingValue(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LifeResult<T> = Result<T, LifeError>;
