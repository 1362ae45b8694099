//! Hash a command-line string through the automaton digest.
//!
//! Packs the input into a 32x32 grid, evolves 16 generations of B3/S23,
//! and prints the hex readout.
//!
//! Run with:
//!   cargo run --example digest -- "some input"

use petri_engine::digest;
use std::process;

const CELL_COUNT: usize = 1024;
const ITERATIONS: u32 = 16;

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello world!".to_string());
    match digest(input.as_bytes(), "B3/S23", CELL_COUNT, ITERATIONS) {
        Ok(hex) => println!("{hex}"),
        Err(e) => {
            eprintln!("digest failed: {e}");
            process::exit(1);
        }
    }
}
