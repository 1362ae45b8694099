//! Double-buffered generational evolution.

use crate::grid::Grid;
use petri_core::{Cell, Rule};
use std::mem;

/// A grid evolving under a birth/survival rule.
///
/// Holds the live grid plus a scratch grid of identical dimensions. Each
/// [`step`](Automaton::step) reads exclusively from the live grid and
/// writes every next-generation cell into the scratch grid, then swaps the
/// two — the update is one atomic generational transition, with no torn
/// reads within a sweep. The scratch grid never escapes this type.
///
/// An automaton is exclusively owned: concurrent hashing of independent
/// inputs means independent `Automaton` values, never a shared one.
#[derive(Clone, Debug)]
pub struct Automaton {
    rule: Rule,
    current: Grid,
    next: Grid,
    generation: u64,
}

impl Automaton {
    /// Seed an automaton with an initial grid and a rule.
    pub fn new(seed: Grid, rule: Rule) -> Self {
        let next = seed.clone();
        Self {
            rule,
            current: seed,
            next,
            generation: 0,
        }
    }

    /// The current grid state.
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// The rule in effect.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Number of generations stepped since seeding.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation.
    ///
    /// For every cell in row-major order: a dead cell becomes alive when
    /// its live-neighbour count is in the rule's birth set; a live cell
    /// dies when its count is not in the survival set; otherwise the cell
    /// keeps its current value.
    pub fn step(&mut self) {
        let (width, height) = (self.current.width(), self.current.height());
        for y in 0..height {
            for x in 0..width {
                let live = self.current.live_neighbours(x as i32, y as i32);
                let alive = if self.current.get(x as i32, y as i32).is_alive() {
                    self.rule.survives_on(live)
                } else {
                    self.rule.born_on(live)
                };
                self.next.set(x, y, if alive { Cell::Alive } else { Cell::Dead });
            }
        }
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }
}
