//! Error types for the packing codec.

use petri_grid::GridError;
use std::fmt;

/// Errors from packing a byte stream into a grid.
///
/// All variants are precondition failures surfaced before any grid is
/// built; there is no fallback or default substitution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// The requested cell count is not a perfect square.
    NotPerfectSquare {
        /// The offending cell count.
        cell_count: usize,
    },
    /// The input holds more bits than the grid has cells.
    DataTooLarge {
        /// Bits required by the input (`data.len() * 8`).
        data_bits: usize,
        /// Cells available.
        cell_count: usize,
    },
    /// Grid construction rejected the computed dimensions.
    Grid(GridError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPerfectSquare { cell_count } => {
                write!(f, "cell count {cell_count} is not a perfect square")
            }
            Self::DataTooLarge {
                data_bits,
                cell_count,
            } => {
                write!(
                    f,
                    "input needs {data_bits} bits but the grid holds only {cell_count} cells"
                )
            }
            Self::Grid(e) => write!(f, "grid construction failed: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for CodecError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
