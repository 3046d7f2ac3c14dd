// Domain layer - the automaton core
pub mod domain;

// Application layer - run state, clock and gesture handling
pub mod application;

// Host layer - macroquad UI, rendering, input polling
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{
    BoundaryMode, Cell, CellChange, GridSimulation, Pattern, RuleSet, SimulationConfig,
    SimulationError, presets,
};
pub use application::{Camera, FrameReport, InteractionController, RunState};
