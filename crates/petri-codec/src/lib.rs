//! Byte-stream to grid packing and hex readout.
//!
//! [`pack`] lays an input byte stream into a square [`petri_grid::Grid`] as
//! a flat bit sequence, and [`to_hex`] reads a grid back out as a lowercase
//! hexadecimal string. The two directions are intentionally asymmetric:
//! packing always pads the stream up to the full cell count, while readout
//! never pads a trailing partial chunk. See [`to_hex`] for the exact
//! consequences.
//!
//! The codec is dependency-free by design — plain bit arithmetic, no serde.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hex;
pub mod pack;

pub use error::CodecError;
pub use hex::to_hex;
pub use pack::pack;
