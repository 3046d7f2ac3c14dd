use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Cell, SimulationError};

/// Set of neighbor counts (0..=8) stored as a bitmask.
/// Bit `n` set means the count `n` is a member.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct NeighborSet(u16);

impl NeighborSet {
    pub const MAX_COUNT: u8 = 8;

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from counts, rejecting anything above 8
    pub fn from_counts(counts: &[u8]) -> Result<Self, SimulationError> {
        counts.iter().try_fold(Self::empty(), |set, &n| set.with(n))
    }

    /// Return a copy of the set with `count` added
    pub fn with(self, count: u8) -> Result<Self, SimulationError> {
        if count > Self::MAX_COUNT {
            return Err(SimulationError::InvalidNeighborCount(count));
        }
        Ok(Self(self.0 | 1 << count))
    }

    #[inline]
    pub const fn contains(self, count: u8) -> bool {
        count <= Self::MAX_COUNT && (self.0 >> count) & 1 == 1
    }

    pub fn counts(self) -> impl Iterator<Item = u8> {
        (0..=Self::MAX_COUNT).filter(move |&n| self.contains(n))
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for NeighborSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.counts()).finish()
    }
}

impl TryFrom<Vec<u8>> for NeighborSet {
    type Error = SimulationError;

    fn try_from(counts: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_counts(&counts)
    }
}

impl From<NeighborSet> for Vec<u8> {
    fn from(set: NeighborSet) -> Self {
        set.counts().collect()
    }
}

/// Birth/survival rule evaluated once per cell per tick.
///
/// `new_life` lists the neighbor counts that bring a dead cell to life,
/// `keep_alive` the counts that let a live cell survive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RuleSet {
    pub new_life: NeighborSet,
    pub keep_alive: NeighborSet,
}

impl RuleSet {
    pub const fn new(new_life: NeighborSet, keep_alive: NeighborSet) -> Self {
        Self { new_life, keep_alive }
    }

    /// Conway's Game of Life (B3/S23)
    pub const fn conway() -> Self {
        Self::new(NeighborSet(1 << 3), NeighborSet(1 << 2 | 1 << 3))
    }

    /// HighLife (B36/S23), known for its replicator
    pub const fn highlife() -> Self {
        Self::new(NeighborSet(1 << 3 | 1 << 6), NeighborSet(1 << 2 | 1 << 3))
    }

    /// Seeds (B2/S), every live cell dies each generation
    pub const fn seeds() -> Self {
        Self::new(NeighborSet(1 << 2), NeighborSet::empty())
    }

    /// Day & Night (B3678/S34678), symmetric under inversion
    pub const fn day_and_night() -> Self {
        Self::new(
            NeighborSet(1 << 3 | 1 << 6 | 1 << 7 | 1 << 8),
            NeighborSet(1 << 3 | 1 << 4 | 1 << 6 | 1 << 7 | 1 << 8),
        )
    }

    /// Compute the next state of a cell from its live neighbor count
    #[inline]
    pub const fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        let alive = match current {
            Cell::Dead => self.new_life.contains(neighbors),
            Cell::Alive => self.keep_alive.contains(neighbors),
        };
        Cell::from_alive(alive)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in self.new_life.counts() {
            write!(f, "{n}")?;
        }
        f.write_str("/S")?;
        for n in self.keep_alive.counts() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

impl FromStr for RuleSet {
    type Err = SimulationError;

    /// Parse B/S notation such as `B3/S23` or `b36/s23`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SimulationError::InvalidRule(s.to_owned());
        let (birth, survival) = s.trim().split_once('/').ok_or_else(invalid)?;

        let parse_part = |part: &str, prefix: char| -> Result<NeighborSet, SimulationError> {
            let digits = part
                .strip_prefix(prefix)
                .or_else(|| part.strip_prefix(prefix.to_ascii_lowercase()))
                .ok_or_else(invalid)?;
            digits.chars().try_fold(NeighborSet::empty(), |set, c| {
                let n = c.to_digit(10).ok_or_else(invalid)? as u8;
                set.with(n)
            })
        };

        Ok(Self::new(parse_part(birth, 'B')?, parse_part(survival, 'S')?))
    }
}

/// Get all named rules
pub fn all_rules() -> Vec<(&'static str, RuleSet)> {
    vec![
        ("Conway", RuleSet::conway()),
        ("HighLife", RuleSet::highlife()),
        ("Seeds", RuleSet::seeds()),
        ("Day&Night", RuleSet::day_and_night()),
    ]
}
