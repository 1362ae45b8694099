//! Hex readout of a grid's bit sequence.

use petri_grid::Grid;

/// Read a grid out as a lowercase hexadecimal string.
///
/// The cells are flattened row-major and grouped into 8-bit chunks,
/// most significant bit first. Every full chunk renders as exactly two
/// hex characters. A trailing chunk of `k < 8` bits is **not** padded up
/// to a byte — it renders as its `k`-bit value in `⌈k/4⌉` characters.
/// Packing always pads the stream to the full cell count while readout
/// never does; the asymmetry is part of the digest contract and is
/// preserved here deliberately.
///
/// ```
/// use petri_codec::{pack, to_hex};
///
/// // 9 cells: one full chunk plus a 1-bit tail.
/// let grid = pack(&[0x07], 9).unwrap();
/// assert_eq!(to_hex(&grid), "031");
/// ```
pub fn to_hex(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cell_count().div_ceil(4));
    let mut chunk = 0u8;
    let mut filled = 0usize;
    for cell in grid.cells() {
        chunk = (chunk << 1) | cell.bit();
        filled += 1;
        if filled == 8 {
            out.push_str(&format!("{chunk:02x}"));
            chunk = 0;
            filled = 0;
        }
    }
    if filled > 0 {
        let width = filled.div_ceil(4);
        out.push_str(&format!("{chunk:0width$x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;
    use petri_core::Cell;
    use proptest::prelude::*;

    /// Hex characters produced by a grid of `cell_count` cells.
    fn expected_len(cell_count: usize) -> usize {
        (cell_count / 8) * 2 + (cell_count % 8).div_ceil(4)
    }

    #[test]
    fn full_chunks_render_two_chars_each() {
        let grid = pack(&[0x00, 0xFF], 16).unwrap();
        assert_eq!(to_hex(&grid), "00ff");
    }

    #[test]
    fn low_bytes_keep_their_leading_zero() {
        let grid = pack(&[0x01, 0x02], 16).unwrap();
        assert_eq!(to_hex(&grid), "0102");
    }

    #[test]
    fn trailing_bits_are_not_padded_to_a_byte() {
        // 25 cells = three full chunks + 1 leftover bit.
        let grid = pack(&[], 25).unwrap();
        assert_eq!(to_hex(&grid), "0000000");
        assert_eq!(to_hex(&grid).len(), expected_len(25));
    }

    #[test]
    fn trailing_nibble_boundary() {
        // 36 cells = four full chunks + 4 leftover bits, exactly one char.
        let mut grid = pack(&[], 36).unwrap();
        // Light the last cell: the 4-bit tail reads 0001.
        grid.set(5, 5, Cell::Alive);
        assert_eq!(to_hex(&grid), "000000001");
    }

    #[test]
    fn five_bit_tail_renders_two_chars() {
        // Perfect squares only leave 0-, 1-, or 4-bit tails; a wider tail
        // needs a non-square grid. 5 bits 10001 reads as 0x11.
        let cells = vec![Cell::Alive, Cell::Dead, Cell::Dead, Cell::Dead, Cell::Alive];
        let grid = Grid::from_cells(5, 1, cells).unwrap();
        assert_eq!(to_hex(&grid), "11");
    }

    #[test]
    fn row_major_flattening_matches_packing() {
        let grid = pack(&[0xAB, 0xCD], 16).unwrap();
        assert_eq!(to_hex(&grid), "abcd");
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn length_follows_the_chunk_law(side in 1usize..=16) {
            let grid = pack(&[], side * side).unwrap();
            prop_assert_eq!(to_hex(&grid).len(), expected_len(side * side));
        }

        #[test]
        fn readout_is_lowercase_hex(
            data in prop::collection::vec(any::<u8>(), 0..=8),
            side in 8usize..=10,
        ) {
            let grid = pack(&data, side * side).unwrap();
            let hex = to_hex(&grid);
            prop_assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }

        #[test]
        fn exact_fit_roundtrips_through_hex(
            // Lengths whose bit counts are perfect squares: 16, 64, 144, 256.
            data in prop_oneof![
                prop::collection::vec(any::<u8>(), 2..=2),
                prop::collection::vec(any::<u8>(), 8..=8),
                prop::collection::vec(any::<u8>(), 18..=18),
                prop::collection::vec(any::<u8>(), 32..=32),
            ],
        ) {
            // With no padding the zero-generation readout reproduces the
            // input bytes.
            let cell_count = data.len() * 8;
            let grid = pack(&data, cell_count).unwrap();
            let hex: String = data.iter().map(|b| format!("{b:02x}")).collect();
            prop_assert_eq!(to_hex(&grid), hex);
        }
    }
}
