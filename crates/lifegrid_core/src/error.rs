//! Error types for board operations.

use thiserror::Error;

/// Errors raised by coordinate-taking and sizing operations on a [`Board`].
///
/// Off-grid neighbors during neighbor counting are a boundary condition, not
/// an error, and never surface here.
///
/// [`Board`]: crate::board::Board
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate fell outside `[0, width) x [0, height)`.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} board")]
    OutOfRange {
        x: i64,
        y: i64,
        width: u16,
        height: u16,
    },

    /// Requested dimensions are negative or exceed `u16::MAX`.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },
}

/// Result type alias for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

impl BoardError {
    #[must_use]
    pub fn out_of_range(x: i64, y: i64, width: u16, height: u16) -> Self {
        Self::OutOfRange {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true for [`BoardError::OutOfRange`].
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
