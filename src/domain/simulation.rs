//! The automaton core: cell storage, the tick rule and boundary policy.
//!
//! A tick is two full passes over the grid. The evaluate pass reads only
//! committed states and writes next states into a separate pending buffer;
//! the commit pass copies pending into current and reports what changed.
//! No cell ever observes a neighbor already advanced in the same tick.

use rand::Rng;
use tracing::debug;

use super::{
    BoundaryMode, Cell, CellChange, Grid, Pattern, Result, RuleSet, SimulationConfig,
};

pub struct GridSimulation {
    current: Grid,
    /// Next-state buffer; only meaningful between evaluate and commit
    pending: Vec<Cell>,
    rules: RuleSet,
    boundary_mode: BoundaryMode,
    generation: u64,
}

impl GridSimulation {
    /// Build a simulation with every cell dead.
    /// Fails with `InvalidDimension` when either dimension is zero.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let current = Grid::new(config.grid_width, config.grid_height)?;
        let pending = vec![Cell::Dead; current.len()];
        Ok(Self {
            current,
            pending,
            rules: config.rules,
            boundary_mode: config.boundary_mode,
            generation: 0,
        })
    }

    /// Conway rules, wrapping edges
    pub fn with_dimensions(width: usize, height: usize) -> Result<Self> {
        Self::new(&SimulationConfig::with_dimensions(width, height))
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }

    pub const fn boundary_mode(&self) -> BoundaryMode {
        self.boundary_mode
    }

    pub fn set_boundary_mode(&mut self, mode: BoundaryMode) {
        if self.boundary_mode != mode {
            debug!(mode = mode.name(), "boundary mode changed");
        }
        self.boundary_mode = mode;
    }

    pub const fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn set_rules(&mut self, rules: RuleSet) {
        debug!(%rules, "rules changed");
        self.rules = rules;
    }

    /// Ticks since construction or the last reset
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Committed state of a cell
    pub fn cell_state(&self, x: usize, y: usize) -> Result<Cell> {
        self.current.get(x, y)
    }

    /// Flip a cell and commit the flip immediately
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<Cell> {
        let state = self.current.toggle(x, y)?;
        debug!(x, y, ?state, "cell toggled");
        Ok(state)
    }

    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) -> Result<()> {
        self.current.set(x, y, cell)
    }

    /// Live neighbors of a cell under the current boundary mode
    pub fn neighbor_count(&self, x: usize, y: usize) -> Result<u8> {
        self.current.get(x, y)?;
        Ok(self.current.count_live_neighbors(x, y, self.boundary_mode))
    }

    /// Stamp a pattern with its top-left corner at `(x, y)`.
    ///
    /// Cells past the edge wrap around in `Wrap` mode and are dropped in
    /// `Bounded` mode. Returns how many cells landed on the grid.
    pub fn place_pattern(&mut self, pattern: &Pattern, x: usize, y: usize) -> usize {
        let (width, height) = self.dimensions();
        let mode = self.boundary_mode;
        // On a torus only the anchor's residue matters
        let (x, y) = match mode {
            BoundaryMode::Wrap => (x % width, y % height),
            BoundaryMode::Bounded => (x, y),
        };
        pattern
            .positions_at(x, y)
            .filter_map(|(px, py)| {
                let px = mode.resolve(i64::try_from(px).ok()?, width)?;
                let py = mode.resolve(i64::try_from(py).ok()?, height)?;
                self.current.set(px, py, Cell::Alive).ok()
            })
            .count()
    }

    /// Replace the grid contents with a random soup
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        self.current.randomize(rng, density);
    }

    /// Advance one generation, returning every cell whose state changed
    pub fn tick(&mut self) -> Vec<CellChange> {
        let mut changes = Vec::new();
        self.tick_with(|change| changes.push(change));
        changes
    }

    /// Advance one generation, handing each change to `sink` during commit
    pub fn tick_with<F: FnMut(CellChange)>(&mut self, mut sink: F) {
        self.evaluate();
        let changed = self.commit(&mut sink);
        self.generation += 1;
        debug!(generation = self.generation, changed, "tick");
    }

    fn evaluate(&mut self) {
        let (width, _) = self.dimensions();
        let grid = &self.current;
        let (rules, mode) = (self.rules, self.boundary_mode);

        for (idx, next) in self.pending.iter_mut().enumerate() {
            let (x, y) = (idx % width, idx / width);
            let neighbors = grid.count_live_neighbors(x, y, mode);
            *next = rules.evolve(grid.cell_at(idx), neighbors);
        }
    }

    fn commit<F: FnMut(CellChange)>(&mut self, sink: &mut F) -> usize {
        let (width, _) = self.dimensions();
        let mut changed = 0;

        for (idx, (cell, &next)) in self
            .current
            .cells_mut()
            .iter_mut()
            .zip(self.pending.iter())
            .enumerate()
        {
            if *cell != next {
                *cell = next;
                changed += 1;
                sink(CellChange {
                    x: idx % width,
                    y: idx / width,
                    state: next,
                });
            }
        }
        changed
    }

    /// Kill every cell and discard pending state
    pub fn reset(&mut self) {
        self.current.clear();
        self.pending.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self.generation = 0;
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Iterate over all committed cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.current.iter_cells()
    }
}
