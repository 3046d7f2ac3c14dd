mod boundary;
mod cell;
mod config;
mod error;
mod grid;
mod patterns;
mod rules;
mod simulation;

pub use boundary::BoundaryMode;
pub use cell::{Cell, CellChange};
pub use config::{SimulationConfig, DEFAULT_DRAG_THRESHOLD, DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL_SECS};
pub use error::{Result, SimulationError};
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rules::{NeighborSet, RuleSet, all_rules};
pub use simulation::GridSimulation;
