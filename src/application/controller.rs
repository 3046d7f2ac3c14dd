use rand::Rng;
use tracing::{debug, info, warn};

use crate::domain::{
    BoundaryMode, CellChange, GridSimulation, Pattern, Result, SimulationConfig,
};

use super::SimulationClock;

/// Position in the host's screen space
pub type ScreenPos = (f32, f32);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RunState {
    /// Fresh grid, clicks toggle cells
    #[default]
    Edit,
    Running,
    Stopped,
}

/// What happened during one `on_frame` call
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub ticked: bool,
    pub changes: Vec<CellChange>,
}

#[derive(Clone, Copy, Debug)]
struct PointerPress {
    origin: ScreenPos,
    panning: bool,
}

/// InteractionController owns run mode and the simulation clock, and turns
/// pointer gestures into edits on the grid it drives.
///
/// The grid is reached only through `GridSimulation`'s public API.
pub struct InteractionController {
    simulation: GridSimulation,
    clock: SimulationClock,
    run_state: RunState,
    has_ever_run: bool,
    press: Option<PointerPress>,
    drag_threshold: f32,
}

impl InteractionController {
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        let simulation = GridSimulation::new(config)?;
        info!(
            width = config.grid_width,
            height = config.grid_height,
            rules = %config.rules,
            boundary = config.boundary_mode.name(),
            "simulation initialized"
        );
        Ok(Self {
            simulation,
            clock: SimulationClock::new(config.tick_interval_secs, config.rate_limited),
            run_state: RunState::Edit,
            has_ever_run: false,
            press: None,
            drag_threshold: config.drag_threshold,
        })
    }

    pub fn simulation(&self) -> &GridSimulation {
        &self.simulation
    }

    pub const fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub const fn has_ever_run(&self) -> bool {
        self.has_ever_run
    }

    /// Edits are accepted only on a grid that has never run since the last reset
    pub fn is_editable(&self) -> bool {
        !self.is_running() && !self.has_ever_run
    }

    pub const fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub const fn rate_limited(&self) -> bool {
        self.clock.rate_limited()
    }

    pub const fn boundary_mode(&self) -> BoundaryMode {
        self.simulation.boundary_mode()
    }

    pub fn is_panning(&self) -> bool {
        self.press.is_some_and(|press| press.panning)
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.run_state = RunState::Running;
        self.has_ever_run = true;
        info!(generation = self.simulation.generation(), "simulation started");
    }

    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.run_state = RunState::Stopped;
        info!(generation = self.simulation.generation(), "simulation stopped");
    }

    pub fn toggle_running(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Back to a blank, editable grid
    pub fn reset(&mut self) {
        self.simulation.reset();
        self.clock.reset();
        self.run_state = RunState::Edit;
        self.has_ever_run = false;
        info!("simulation reset");
    }

    pub fn set_rate_limited(&mut self, limited: bool) {
        self.clock.set_rate_limited(limited);
        debug!(limited, "tick rate limit changed");
    }

    pub fn toggle_rate_limited(&mut self) {
        self.set_rate_limited(!self.rate_limited());
    }

    pub fn set_boundary_mode(&mut self, mode: BoundaryMode) {
        self.simulation.set_boundary_mode(mode);
    }

    pub fn toggle_boundary_mode(&mut self) {
        self.set_boundary_mode(self.boundary_mode().toggled());
    }

    /// Advance the clock by `delta` seconds and tick at most once
    pub fn on_frame(&mut self, delta: f64) -> FrameReport {
        if !self.is_running() {
            return FrameReport::default();
        }

        let delta = if delta >= 0.0 {
            delta
        } else {
            warn!(delta, "ignoring invalid frame delta");
            0.0
        };

        if !self.clock.advance(delta) {
            return FrameReport::default();
        }

        FrameReport {
            ticked: true,
            changes: self.simulation.tick(),
        }
    }

    pub fn on_pointer_down(&mut self, pos: ScreenPos) {
        self.press = Some(PointerPress {
            origin: pos,
            panning: false,
        });
    }

    /// Track a held pointer. Once it has moved past the drag threshold the
    /// gesture becomes a pan and the offset from the press point is returned.
    pub fn on_pointer_drag(&mut self, pos: ScreenPos) -> Option<ScreenPos> {
        let threshold_sq = self.drag_threshold * self.drag_threshold;
        let press = self.press.as_mut()?;
        let offset = (pos.0 - press.origin.0, pos.1 - press.origin.1);

        if !press.panning && offset.0 * offset.0 + offset.1 * offset.1 > threshold_sq {
            press.panning = true;
        }
        press.panning.then_some(offset)
    }

    /// Finish a gesture. A release that never became a drag is a click: while
    /// editable it toggles the cell under `pos`, located with `project`.
    /// Clicks landing off the grid are ignored.
    pub fn on_pointer_up<P>(&mut self, pos: ScreenPos, project: P) -> Option<CellChange>
    where
        P: FnOnce(ScreenPos) -> (i32, i32),
    {
        let press = self.press.take()?;
        if press.panning || !self.is_editable() {
            return None;
        }

        let (gx, gy) = project(pos);
        let (x, y) = (usize::try_from(gx).ok()?, usize::try_from(gy).ok()?);
        match self.simulation.toggle_cell(x, y) {
            Ok(state) => Some(CellChange { x, y, state }),
            Err(err) => {
                debug!(%err, "click outside grid ignored");
                None
            }
        }
    }

    /// Stamp a pattern while editable. Returns whether anything was placed.
    pub fn place_pattern(&mut self, pattern: &Pattern, x: usize, y: usize) -> bool {
        if !self.is_editable() {
            return false;
        }
        let placed = self.simulation.place_pattern(pattern, x, y);
        debug!(pattern = pattern.name, x, y, placed, "pattern placed");
        placed > 0
    }

    /// Fill the grid with a random soup while editable
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.simulation.fill_random(rng, density);
        debug!(population = self.simulation.population(), "grid randomized");
        true
    }

    /// End of the host loop
    pub fn shutdown(&mut self) {
        self.stop();
        self.press = None;
        info!(
            generation = self.simulation.generation(),
            population = self.simulation.population(),
            "simulation shut down"
        );
    }
}
