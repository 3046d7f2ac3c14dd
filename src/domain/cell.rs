use serde::{Deserialize, Serialize};

/// Cell represents the fundamental unit of the automaton.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip the cell state, used by build-mode edits
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// A committed state change at a grid position.
/// This is the whole rendering contract: the host redraws `(x, y)` as `state`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellChange {
    pub x: usize,
    pub y: usize,
    pub state: Cell,
}
