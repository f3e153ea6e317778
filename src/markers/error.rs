use thiserror::Error;

use super::MarkerStatus;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarkerError {
    #[error("category table is empty")]
    EmptyTable,

    #[error("category {index} has bound {bound}, expected a value in [0, 1]")]
    BoundOutOfRange { index: usize, bound: f64 },

    #[error("category {index} bound {bound} is below the previous bound {previous}")]
    DecreasingBound { index: usize, bound: f64, previous: f64 },

    #[error("final category bound is {0}, expected 1.0")]
    FinalBound(f64),

    #[error("status {0} appears more than once")]
    DuplicateStatus(MarkerStatus),

    #[error("unknown status {0:?}")]
    UnknownStatus(String),

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}
