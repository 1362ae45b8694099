//! The digest engine and the one-shot digest function.

use crate::error::DigestError;
use petri_codec::{pack, to_hex};
use petri_core::Rule;
use petri_grid::{Automaton, Grid};

/// A seeded automaton with a configured iteration budget.
///
/// Construction packs the input bytes into a square grid and parses the
/// rule; evolution then proceeds one generation per [`step`](Self::step),
/// or all configured generations at once through
/// [`digest`](Self::digest). The state may be read out at any point —
/// [`current_hex`](Self::current_hex) snapshots without advancing — and
/// evolution can always continue afterwards.
///
/// ```
/// use petri_engine::LifeHasher;
///
/// let mut hasher = LifeHasher::new(b"Hello world!", "B3/S23", 100, 10).unwrap();
/// let digest = hasher.digest();
/// assert_eq!(digest.len(), 25);
/// assert_eq!(hasher.generation(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct LifeHasher {
    automaton: Automaton,
    iterations: u32,
}

impl LifeHasher {
    /// Seed a hasher from input bytes, a rule descriptor, a grid cell
    /// count, and an iteration count.
    ///
    /// Codec validation runs first, so an input that both fails to pack
    /// and carries a malformed rule surfaces the codec error.
    ///
    /// # Errors
    ///
    /// [`DigestError::Codec`] when `cell_count` is not a positive perfect
    /// square or cannot hold `data`; [`DigestError::Rule`] when `rule`
    /// does not match `B<digits>/S<digits>`.
    pub fn new(
        data: &[u8],
        rule: &str,
        cell_count: usize,
        iterations: u32,
    ) -> Result<Self, DigestError> {
        let seed = pack(data, cell_count)?;
        let rule: Rule = rule.parse()?;
        Ok(Self {
            automaton: Automaton::new(seed, rule),
            iterations,
        })
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        self.automaton.step();
    }

    /// Run the configured number of generations from the current state,
    /// then read the grid out as lowercase hex.
    ///
    /// Always runs the full budget — no fixed-point detection, no early
    /// termination; stepping past a stable configuration simply reproduces
    /// the same grid.
    pub fn digest(&mut self) -> String {
        for _ in 0..self.iterations {
            self.automaton.step();
        }
        to_hex(self.automaton.grid())
    }

    /// Read the current grid out as lowercase hex without advancing.
    pub fn current_hex(&self) -> String {
        to_hex(self.automaton.grid())
    }

    /// The current grid, for rendering or inspection.
    pub fn grid(&self) -> &Grid {
        self.automaton.grid()
    }

    /// The rule in effect.
    pub fn rule(&self) -> &Rule {
        self.automaton.rule()
    }

    /// Generations stepped since seeding.
    pub fn generation(&self) -> u64 {
        self.automaton.generation()
    }

    /// The configured iteration budget of [`digest`](Self::digest).
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

/// Hash `data` in one shot: pack, evolve `iterations` generations under
/// `rule`, read out as lowercase hex.
///
/// A pure, deterministic map — identical inputs always produce the
/// identical string, and no state survives the call.
///
/// # Errors
///
/// Propagates the same validation failures as [`LifeHasher::new`].
///
/// ```
/// use petri_engine::digest;
///
/// let a = digest(b"Hello world!", "B3/S23", 100, 10).unwrap();
/// let b = digest(b"Hello world!", "B3/S23", 100, 10).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn digest(
    data: &[u8],
    rule: &str,
    cell_count: usize,
    iterations: u32,
) -> Result<String, DigestError> {
    Ok(LifeHasher::new(data, rule, cell_count, iterations)?.digest())
}
