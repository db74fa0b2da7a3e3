//! Typed errors raised by the in-memory reference sink

use thiserror::Error;

use crate::model::Coordinate;

/// Faults a sink may raise on write
///
/// The binder never handles these: sink failures abort the render pass and
/// propagate to the caller unmodified.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("invalid cell coordinate {0:?}: rows are 1-based")]
    InvalidCoordinate(Coordinate),

    #[error("invalid row range {first_row}..{last_row} for column {column}")]
    InvalidRange {
        column: usize,
        first_row: u32,
        last_row: u32,
    },

    #[error("invalid sheet title {title:?}: {reason}")]
    InvalidTitle { title: String, reason: &'static str },
}
