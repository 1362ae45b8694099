//! Benchmark fixtures for the petri automaton-digest engine.
//!
//! Provides deterministic, seeded inputs so benchmark runs are
//! reproducible:
//!
//! - [`seeded_bytes`]: a reproducible input byte stream
//! - [`seeded_grid`]: a reproducible half-dense random grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use petri_core::Cell;
use petri_grid::Grid;
use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A reproducible byte stream of the given length.
pub fn seeded_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill(&mut data[..]);
    data
}

/// A reproducible `side x side` grid with roughly half the cells alive.
pub fn seeded_grid(side: usize, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells = (0..side * side)
        .map(|_| Cell::from_bit(rng.random::<u8>() & 1))
        .collect();
    Grid::from_cells(side, side, cells).unwrap()
}
