//! Packing a byte stream into a square grid.

use crate::error::CodecError;
use petri_core::Cell;
use petri_grid::Grid;

/// Pack `data` into a square grid of `cell_count` cells.
///
/// The stream is laid out MSB-first: every byte except the last
/// contributes its eight bits at the head, then `cell_count - data.len()*8`
/// zero padding bits, then the final byte's eight bits in the last eight
/// cell positions. The flat sequence fills the grid row-major. Empty input
/// packs to an all-dead grid.
///
/// # Errors
///
/// - [`CodecError::DataTooLarge`] when `data.len() * 8 > cell_count`;
///   checked first, so it wins when the cell count is also not square.
/// - [`CodecError::NotPerfectSquare`] when `cell_count` has no integer
///   square root.
/// - [`CodecError::Grid`] when the computed dimensions are rejected
///   (a zero cell count).
///
/// ```
/// use petri_codec::pack;
///
/// let grid = pack(&[0b1010_0001], 16).unwrap();
/// assert_eq!(grid.width(), 4);
/// // Eight padding bits, then the byte: the last row reads 0001.
/// assert_eq!(grid.get(3, 3).bit(), 1);
/// assert_eq!(grid.population(), 3);
/// ```
pub fn pack(data: &[u8], cell_count: usize) -> Result<Grid, CodecError> {
    let data_bits = data.len() * 8;
    if data_bits > cell_count {
        return Err(CodecError::DataTooLarge {
            data_bits,
            cell_count,
        });
    }
    let side = cell_count.isqrt();
    if side * side != cell_count {
        return Err(CodecError::NotPerfectSquare { cell_count });
    }

    let mut cells = vec![Cell::Dead; cell_count];
    if let Some((&last, head)) = data.split_last() {
        for (i, &byte) in head.iter().enumerate() {
            spread_bits(byte, &mut cells[i * 8..(i + 1) * 8]);
        }
        // The padding precedes the final byte, which lands in the last
        // eight cells.
        spread_bits(last, &mut cells[cell_count - 8..]);
    }
    Ok(Grid::from_cells(side, side, cells)?)
}

/// Write a byte's bits, most significant first, into eight cells.
fn spread_bits(byte: u8, cells: &mut [Cell]) {
    for (bit, cell) in cells.iter_mut().enumerate() {
        *cell = Cell::from_bit((byte >> (7 - bit)) & 1);
    }
}
