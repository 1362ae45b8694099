//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
///
/// Lookups never error: out-of-range coordinates are defined behavior via
/// toroidal wraparound, not a failure path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length found at `row`.
        found: usize,
    },
    /// The flat cell buffer does not hold `width * height` cells.
    CellCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Cells provided.
        found: usize,
    },
    /// A dimension exceeds the maximum (coordinates use `i32`).
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The offending value.
        value: usize,
        /// The maximum allowed.
        max: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one cell"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "cell buffer holds {found} cells, expected {expected}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
