use macroquad::prelude::*;

use crate::application::{Camera, InteractionController, RunState};
use crate::domain::{Cell, CellChange, GridSimulation};
use crate::ui::{Button, CELL_SIZE};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Host-side copy of what each cell currently shows.
///
/// Fed only by change notifications from ticks and edits, so a frame
/// touches the visual state of changed cells and nothing else.
pub struct CellSprites {
    width: usize,
    shown: Vec<Cell>,
}

impl CellSprites {
    /// Mirror the simulation's current state
    pub fn new(simulation: &GridSimulation) -> Self {
        let (width, height) = simulation.dimensions();
        let mut sprites = Self {
            width,
            shown: vec![Cell::Dead; width * height],
        };
        sprites.sync(simulation);
        sprites
    }

    pub fn apply(&mut self, changes: &[CellChange]) {
        for change in changes {
            self.shown[change.y * self.width + change.x] = change.state;
        }
    }

    /// Forced refresh after bulk edits such as reset or randomize
    pub fn sync(&mut self, simulation: &GridSimulation) {
        for (x, y, cell) in simulation.iter_cells() {
            self.shown[y * self.width + x] = cell;
        }
    }

    pub fn shown(&self, x: usize, y: usize) -> Cell {
        self.shown[y * self.width + x]
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.shown.len() / self.width)
    }
}

/// Draw every on-screen cell
pub fn draw_grid(sprites: &CellSprites, camera: &Camera) {
    let cell_size = CELL_SIZE * camera.zoom;
    let (grid_width, grid_height) = sprites.dimensions();
    let draw_lines = cell_size >= 4.0;

    for y in 0..grid_height {
        for x in 0..grid_width {
            let (sx, sy) = camera.grid_to_screen(x, y, CELL_SIZE);
            if sx + cell_size < 0.0 || sx > screen_width() || sy + cell_size < 0.0 || sy > screen_height() {
                continue;
            }

            let color = if sprites.shown(x, y).is_alive() {
                ALIVE_COLOR
            } else {
                DEAD_COLOR
            };
            draw_rectangle(sx, sy, cell_size, cell_size, color);
            if draw_lines {
                draw_rectangle_lines(sx, sy, cell_size, cell_size, 1.0, GRID_LINE_COLOR);
            }
        }
    }
}

/// Buttons plus a status line at the bottom of the window
pub fn draw_controls(
    controller: &InteractionController,
    buttons: &[Button],
    hover: Option<(usize, usize)>,
    mouse_pos: (f32, f32),
) {
    buttons.iter().for_each(|button| button.draw(mouse_pos));

    let simulation = controller.simulation();
    let status = match controller.run_state() {
        RunState::Edit => "Editing",
        RunState::Running => "Running",
        RunState::Stopped => "Stopped",
    };
    let clock = controller.clock();
    let pace = if clock.rate_limited() {
        format!("{:.2}/{:.2}s", clock.accumulated(), clock.tick_interval())
    } else {
        "unlimited".to_owned()
    };
    let mut line = format!(
        "{status} | {} | {} | {pace} | gen {} | pop {} | {} fps",
        simulation.rules(),
        simulation.boundary_mode().name(),
        simulation.generation(),
        simulation.population(),
        get_fps(),
    );
    if let Some((x, y, neighbors)) =
        hover.and_then(|(x, y)| simulation.neighbor_count(x, y).ok().map(|n| (x, y, n)))
    {
        line.push_str(&format!(" | ({x}, {y}) n={neighbors}"));
    }

    draw_text(&line, 10.0, screen_height() - 12.0, 18.0, LIGHTGRAY);
}
