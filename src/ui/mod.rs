mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::{Rect, screen_height, screen_width};

use crate::application::InteractionController;

pub const CELL_SIZE: f32 = 12.0;
pub const MARGIN: f32 = 10.0;

fn narrow_width() -> f32 {
    (screen_width() * 0.1).max(90.0)
}

fn wide_width() -> f32 {
    (screen_width() * 0.2).max(180.0)
}

fn button_height() -> f32 {
    (screen_height() * 0.08).max(32.0)
}

/// Control buttons for the current controller state, laid out in two
/// columns in the top-left corner. Reset only appears once the grid has run.
pub fn create_buttons(controller: &InteractionController) -> Vec<Button> {
    let (narrow, wide, height) = (narrow_width(), wide_width(), button_height());
    let second_row = MARGIN * 2.0 + height;
    let second_col = MARGIN * 2.0 + narrow;

    let start_stop = if controller.is_running() { "Stop" } else { "Start" };
    let limit = if controller.rate_limited() {
        "Disable Limit"
    } else {
        "Enable Limit"
    };
    let looping = match controller.boundary_mode() {
        crate::domain::BoundaryMode::Wrap => "Disable Looping Sides",
        crate::domain::BoundaryMode::Bounded => "Enable Looping Sides",
    };

    let mut buttons = vec![
        Button::new(Rect::new(MARGIN, MARGIN, narrow, height), start_stop, ButtonAction::StartStop),
        Button::new(Rect::new(second_col, MARGIN, wide, height), limit, ButtonAction::ToggleLimit),
        Button::new(
            Rect::new(second_col, second_row, wide, height),
            looping,
            ButtonAction::ToggleLoopSides,
        ),
    ];
    if controller.has_ever_run() {
        buttons.push(Button::new(
            Rect::new(MARGIN, second_row, narrow, height),
            "Reset",
            ButtonAction::Reset,
        ));
    }
    buttons
}
