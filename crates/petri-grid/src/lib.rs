//! Toroidal grid storage and the double-buffered automaton.
//!
//! [`Grid`] is a flat, row-major field of [`petri_core::Cell`]s with
//! periodic (torus) boundary topology: every cell has exactly eight Moore
//! neighbours, and out-of-range lookups wrap to the opposite edge instead
//! of failing. [`Automaton`] evolves a grid one synchronous generation at
//! a time against a scratch buffer of the same shape, so a sweep never
//! reads cells it has already rewritten.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod automaton;
pub mod error;
pub mod grid;

pub use automaton::Automaton;
pub use error::GridError;
pub use grid::{Grid, NEIGHBOUR_OFFSETS};
