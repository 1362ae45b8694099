//! Petri: a cellular-automaton digest engine.
//!
//! Input bytes are packed into a square bit-grid, evolved for a fixed
//! number of generations under a configurable birth/survival rule (a
//! generalized Conway's Game of Life on a torus), and the final grid is
//! read back out as a lowercase hexadecimal string. Deterministic by
//! construction; not cryptographic — there is no claimed preimage or
//! collision resistance.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all petri sub-crates. For most users, adding `petri` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use petri::prelude::*;
//!
//! // One-shot: pack twelve bytes into a 10x10 grid, run ten
//! // generations of the classic Conway rule, read out hex.
//! let hex = digest(b"Hello world!", "B3/S23", 100, 10).unwrap();
//! assert_eq!(hex.len(), 25);
//!
//! // Stepwise: the same engine, generation by generation.
//! let mut hasher = LifeHasher::new(b"Hello world!", "B3/S23", 100, 10).unwrap();
//! hasher.step();
//! println!("{}", hasher.grid());
//! let snapshot = hasher.current_hex();
//! assert_eq!(snapshot.len(), 25);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `petri-core` | [`types::Cell`], [`types::Rule`], rule parsing |
//! | [`grid`] | `petri-grid` | toroidal [`grid::Grid`] and the double-buffered [`grid::Automaton`] |
//! | [`codec`] | `petri-codec` | byte-stream packing and hex readout |
//! | [`engine`] | `petri-engine` | [`engine::LifeHasher`] and the one-shot [`engine::digest`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core cell and rule types (`petri-core`).
///
/// Contains the two-state [`types::Cell`] and the birth/survival
/// [`types::Rule`] with its `B3/S23`-descriptor parser.
pub use petri_core as types;

/// Toroidal grid storage and the automaton (`petri-grid`).
///
/// [`grid::Grid`] wraps out-of-range lookups to the opposite edge;
/// [`grid::Automaton`] evolves one atomic generation per step against a
/// private scratch buffer.
pub use petri_grid as grid;

/// Byte-stream packing and hex readout (`petri-codec`).
///
/// [`codec::pack`] seeds a square grid from bytes; [`codec::to_hex`]
/// renders any grid as lowercase hex.
pub use petri_codec as codec;

/// The digest engine (`petri-engine`).
///
/// [`engine::LifeHasher`] for stepwise evolution and snapshots,
/// [`engine::digest`] for the one-shot map.
pub use petri_engine as engine;

/// Common imports for typical petri usage.
///
/// ```rust
/// use petri::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use petri_core::{Cell, Rule};

    // Errors
    pub use petri_codec::CodecError;
    pub use petri_core::RuleError;
    pub use petri_engine::DigestError;
    pub use petri_grid::GridError;

    // Grid and automaton
    pub use petri_grid::{Automaton, Grid};

    // Codec
    pub use petri_codec::{pack, to_hex};

    // Engine
    pub use petri_engine::{digest, LifeHasher};
}
