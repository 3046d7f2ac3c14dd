mod camera;
mod clock;
mod controller;

pub use camera::Camera;
pub use clock::SimulationClock;
pub use controller::{FrameReport, InteractionController, RunState, ScreenPos};
