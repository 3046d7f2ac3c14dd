use serde::{Deserialize, Serialize};

/// Policy for neighbor lookups that fall beyond the grid edges.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub enum BoundaryMode {
    /// Opposite edges are joined, the grid behaves like a torus
    #[default]
    Wrap,
    /// Everything outside the grid is permanently dead
    Bounded,
}

impl BoundaryMode {
    /// Resolve a possibly out-of-range coordinate along an axis of length `len`.
    /// Returns `None` when the position reads as dead.
    #[inline]
    pub fn resolve(self, coord: i64, len: usize) -> Option<usize> {
        let len = len as i64;
        if (0..len).contains(&coord) {
            return Some(coord as usize);
        }
        match self {
            BoundaryMode::Wrap => Some(coord.rem_euclid(len) as usize),
            BoundaryMode::Bounded => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            BoundaryMode::Wrap => BoundaryMode::Bounded,
            BoundaryMode::Bounded => BoundaryMode::Wrap,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BoundaryMode::Wrap => "Wrap",
            BoundaryMode::Bounded => "Bounded",
        }
    }
}
