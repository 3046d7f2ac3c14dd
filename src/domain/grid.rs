use rand::Rng;

use super::{BoundaryMode, Cell, Result, SimulationError};

/// Grid is the flat cell arena of the automaton.
/// Cells live at `y * width + x`; a cell is identified purely by its slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    /// Dimensions whose cell count cannot be allocated are rejected.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let invalid = SimulationError::InvalidDimension { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let len = width.checked_mul(height).ok_or_else(|| invalid.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, Cell::Dead);
        Ok(Self { width, height, cells })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub(crate) const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Inverse of `get_index`
    #[inline]
    pub(crate) const fn position(&self, idx: usize) -> (usize, usize) {
        (idx % self.width, idx / self.width)
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.width && y < self.height {
            Ok(self.get_index(x, y))
        } else {
            Err(SimulationError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        self.checked_index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip the cell at position and return its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<Cell> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx])
    }

    #[inline]
    pub(crate) fn cell_at(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Count live neighbors among the 8 surrounding positions.
    /// Off-grid positions resolve through `boundary`.
    pub fn count_live_neighbors(&self, x: usize, y: usize, boundary: BoundaryMode) -> u8 {
        let (x, y) = (x as i64, y as i64);

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = boundary.resolve(x + dx, self.width)?;
                let ny = boundary.resolve(y + dy, self.height)?;
                Some(self.cells[self.get_index(nx, ny)])
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill every cell independently alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_finite() {
            density.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(density)));
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| {
                let (x, y) = self.position(idx);
                (x, y, cell)
            })
    }
}
