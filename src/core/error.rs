//! Error types for the brush engine

use thiserror::Error;

use crate::mask::SliceId;

/// Main error type for the engine
#[derive(Debug, Error)]
pub enum Error {
    #[error("slice {slice} is not present in the labelmap volume")]
    SliceNotFound { slice: SliceId },

    #[error("column count mismatch: slice has {expected} columns, caller passed {actual}")]
    ColumnMismatch { expected: u32, actual: u32 },

    #[error("point ({x}, {y}) lies outside the {columns}x{rows} slice")]
    PointOutOfBounds { x: u32, y: u32, columns: u32, rows: u32 },

    #[error("segment index 0 is reserved for unlabeled pixels and cannot be painted")]
    ReservedSegment,

    #[error("pixel buffer of length {len} does not match a {columns}x{rows} slice")]
    BufferShape { len: usize, columns: u32, rows: u32 },

    #[error("render unavailable: {0}")]
    RenderUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// True for caller bugs (bad slice, bad coordinates, reserved segment).
    ///
    /// These are never retried; the host should fix the input it hands over.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Error::SliceNotFound { .. }
                | Error::ColumnMismatch { .. }
                | Error::PointOutOfBounds { .. }
                | Error::ReservedSegment
                | Error::BufferShape { .. }
        )
    }
}
