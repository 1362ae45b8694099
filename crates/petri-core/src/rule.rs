//! Birth/survival rule descriptors in `B3/S23` notation.

use indexmap::IndexSet;
use std::fmt;
use std::str::FromStr;

/// Maximum characters per digit group in a rule descriptor.
const MAX_GROUP_LEN: usize = 8;

/// A birth/survival rule for a Moore-neighbourhood automaton.
///
/// Parsed from descriptors of the form `B<digits>/S<digits>` where each
/// group holds up to eight characters drawn from `0`–`8`. Prefixes are
/// case-insensitive, duplicate digits are tolerated (membership, not
/// multiplicity, drives the rule), and either group may be empty — a rule
/// where nothing is ever born, or nothing ever survives, is legal.
///
/// Digits are kept in descriptor order, but equality and the
/// [`born_on`](Rule::born_on)/[`survives_on`](Rule::survives_on) queries are
/// pure set semantics: `B33/S23` behaves identically to `B3/S23`.
///
/// ```
/// use petri_core::Rule;
///
/// let rule: Rule = "B3/S23".parse().unwrap();
/// assert!(rule.born_on(3));
/// assert!(rule.survives_on(2) && rule.survives_on(3));
/// assert!(!rule.survives_on(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    born: IndexSet<u8>,
    survival: IndexSet<u8>,
}

impl Rule {
    /// The classic Conway rule, `B3/S23`.
    pub fn conway() -> Self {
        Self {
            born: IndexSet::from([3]),
            survival: IndexSet::from([2, 3]),
        }
    }

    /// `true` if a dead cell with `live_neighbours` live neighbours is born.
    pub fn born_on(&self, live_neighbours: u8) -> bool {
        self.born.contains(&live_neighbours)
    }

    /// `true` if a live cell with `live_neighbours` live neighbours survives.
    pub fn survives_on(&self, live_neighbours: u8) -> bool {
        self.survival.contains(&live_neighbours)
    }

    /// Birth neighbour counts, in descriptor order.
    pub fn born(&self) -> impl Iterator<Item = u8> + '_ {
        self.born.iter().copied()
    }

    /// Survival neighbour counts, in descriptor order.
    pub fn survival(&self) -> impl Iterator<Item = u8> + '_ {
        self.survival.iter().copied()
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (born, survival) = s.split_once('/').ok_or(RuleError::MissingSeparator)?;
        Ok(Self {
            born: parse_group(born, 'B')?,
            survival: parse_group(survival, 'S')?,
        })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in &self.born {
            write!(f, "{n}")?;
        }
        f.write_str("/S")?;
        for n in &self.survival {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Parse one `B…` or `S…` group into its neighbour-count set.
fn parse_group(group: &str, marker: char) -> Result<IndexSet<u8>, RuleError> {
    let digits = group
        .strip_prefix(marker)
        .or_else(|| group.strip_prefix(marker.to_ascii_lowercase()))
        .ok_or(RuleError::BadGroupPrefix { expected: marker })?;

    if digits.len() > MAX_GROUP_LEN {
        return Err(RuleError::GroupTooLong {
            group: marker,
            len: digits.len(),
        });
    }

    let mut counts = IndexSet::with_capacity(digits.len());
    for ch in digits.chars() {
        // Radix 9 accepts exactly the digits 0..=8.
        match ch.to_digit(9) {
            Some(d) => {
                counts.insert(d as u8);
            }
            None => return Err(RuleError::InvalidNeighbourCount { found: ch }),
        }
    }
    Ok(counts)
}

/// Errors from parsing a rule descriptor string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The descriptor has no `/` between the birth and survival groups.
    MissingSeparator,
    /// A group does not start with its `B` or `S` marker.
    BadGroupPrefix {
        /// The marker the group was expected to start with.
        expected: char,
    },
    /// A neighbour count is not a digit in `0..=8`.
    InvalidNeighbourCount {
        /// The offending character.
        found: char,
    },
    /// A digit group is longer than eight characters.
    GroupTooLong {
        /// The marker of the offending group.
        group: char,
        /// The number of characters found.
        len: usize,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => {
                write!(f, "rule descriptor needs '/' between birth and survival groups")
            }
            Self::BadGroupPrefix { expected } => {
                write!(f, "group must start with '{expected}'")
            }
            Self::InvalidNeighbourCount { found } => {
                write!(f, "neighbour count must be a digit in 0..=8, got {found:?}")
            }
            Self::GroupTooLong { group, len } => {
                write!(f, "'{group}' group has {len} digits, at most {MAX_GROUP_LEN} allowed")
            }
        }
    }
}

impl std::error::Error for RuleError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Accepted descriptors ────────────────────────────────────

    #[test]
    fn conway_descriptor() {
        let rule: Rule = "B3/S23".parse().unwrap();
        assert_eq!(rule.born().collect::<Vec<_>>(), vec![3]);
        assert_eq!(rule.survival().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(rule, Rule::conway());
    }

    #[test]
    fn empty_groups_are_legal() {
        let rule: Rule = "B/S".parse().unwrap();
        assert_eq!(rule.born().count(), 0);
        assert_eq!(rule.survival().count(), 0);
        for n in 0..=8 {
            assert!(!rule.born_on(n));
            assert!(!rule.survives_on(n));
        }
    }

    #[test]
    fn prefixes_are_case_insensitive() {
        let lower: Rule = "b3/s23".parse().unwrap();
        let upper: Rule = "B3/S23".parse().unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn duplicate_digits_collapse() {
        let dup: Rule = "B33/S23".parse().unwrap();
        assert_eq!(dup, Rule::conway());
    }

    #[test]
    fn descriptor_order_is_kept() {
        let rule: Rule = "B62/S31".parse().unwrap();
        assert_eq!(rule.born().collect::<Vec<_>>(), vec![6, 2]);
        assert_eq!(rule.survival().collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn display_is_canonical_uppercase() {
        let rule: Rule = "b3/s23".parse().unwrap();
        assert_eq!(rule.to_string(), "B3/S23");
        assert_eq!("B/S".parse::<Rule>().unwrap().to_string(), "B/S");
    }

    // ── Rejected descriptors ────────────────────────────────────

    #[test]
    fn missing_separator_rejected() {
        assert_eq!("B3S23".parse::<Rule>(), Err(RuleError::MissingSeparator));
    }

    #[test]
    fn bad_prefix_rejected() {
        assert_eq!(
            "X3/S23".parse::<Rule>(),
            Err(RuleError::BadGroupPrefix { expected: 'B' })
        );
        assert_eq!(
            "B3/Q23".parse::<Rule>(),
            Err(RuleError::BadGroupPrefix { expected: 'S' })
        );
    }

    #[test]
    fn nine_is_not_a_neighbour_count() {
        assert_eq!(
            "B9/S23".parse::<Rule>(),
            Err(RuleError::InvalidNeighbourCount { found: '9' })
        );
    }

    #[test]
    fn group_longer_than_eight_rejected() {
        assert_eq!(
            "B012345678/S".parse::<Rule>(),
            Err(RuleError::GroupTooLong { group: 'B', len: 9 })
        );
    }

    #[test]
    fn empty_string_rejected() {
        assert!("".parse::<Rule>().is_err());
    }

    // ── Property tests ──────────────────────────────────────────

    fn digits(counts: &[u8]) -> String {
        counts.iter().map(|d| d.to_string()).collect()
    }

    proptest! {
        #[test]
        fn any_valid_descriptor_parses_to_membership(
            born in prop::collection::vec(0u8..=8, 0..=8),
            survival in prop::collection::vec(0u8..=8, 0..=8),
        ) {
            let descriptor = format!("B{}/S{}", digits(&born), digits(&survival));
            let rule: Rule = descriptor.parse().unwrap();
            for n in 0..=8u8 {
                prop_assert_eq!(rule.born_on(n), born.contains(&n));
                prop_assert_eq!(rule.survives_on(n), survival.contains(&n));
            }
        }

        #[test]
        fn display_roundtrips(
            born in prop::collection::vec(0u8..=8, 0..=8),
            survival in prop::collection::vec(0u8..=8, 0..=8),
        ) {
            let descriptor = format!("B{}/S{}", digits(&born), digits(&survival));
            let rule: Rule = descriptor.parse().unwrap();
            let reparsed: Rule = rule.to_string().parse().unwrap();
            prop_assert_eq!(rule, reparsed);
        }
    }
}
