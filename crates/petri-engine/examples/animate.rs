//! A glider drifting across a toroidal grid.
//!
//! Seeds the classic five-cell glider on an 8x8 torus and animates it in
//! the terminal, one generation every 200 ms. The glider re-enters from
//! the opposite edge instead of falling off.
//!
//! Run with:
//!   cargo run --example animate

use petri_core::{Cell, Rule};
use petri_grid::{Automaton, Grid};
use std::thread;
use std::time::Duration;

const GENERATIONS: u32 = 64;

fn main() {
    let mut grid = Grid::new(8, 8).expect("8x8 is a valid grid");
    for (x, y) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
        grid.set(x, y, Cell::Alive);
    }
    let mut world = Automaton::new(grid, Rule::conway());

    for _ in 0..GENERATIONS {
        // Clear the screen and home the cursor.
        print!("\x1b[2J\x1b[H");
        println!("generation {}", world.generation());
        println!("{}", world.grid());
        world.step();
        thread::sleep(Duration::from_millis(200));
    }
}
