use macroquad::prelude::*;
use ::rand::Rng;

use crate::application::{Camera, InteractionController};
use crate::domain::{CellChange, presets};
use crate::ui::{Button, ButtonAction, CELL_SIZE};

/// Density used by the randomize shortcut
const SOUP_DENSITY: f64 = 0.3;

/// Zoom with the mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_by(1.1);
    } else if wheel < 0.0 {
        camera.zoom_by(1.0 / 1.1);
    }
}

/// Route left-button press/hold/release into the controller's gesture
/// handling. Drags pan the camera; clicks toggle the cell under the cursor.
/// Presses that start on a button are left to `process_button_clicks`.
pub fn handle_pointer(
    controller: &mut InteractionController,
    camera: &mut Camera,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> Option<CellChange> {
    if is_mouse_button_pressed(MouseButton::Left) && !buttons.iter().any(|b| b.is_hovered(mouse_pos)) {
        controller.on_pointer_down(mouse_pos);
    }

    if is_mouse_button_down(MouseButton::Left) {
        if let Some(offset) = controller.on_pointer_drag(mouse_pos) {
            camera.pan_from_anchor(offset);
        }
    }

    if is_mouse_button_released(MouseButton::Left) {
        camera.end_pan();
        return controller.on_pointer_up(mouse_pos, |pos| camera.screen_to_grid(pos, CELL_SIZE));
    }
    None
}

/// Apply button presses. Returns true when the grid changed in bulk.
pub fn process_button_clicks(
    controller: &mut InteractionController,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> bool {
    let Some(button) = buttons.iter().find(|b| b.is_clicked(mouse_pos)) else {
        return false;
    };

    match button.action {
        ButtonAction::StartStop => controller.toggle_running(),
        ButtonAction::ToggleLimit => controller.toggle_rate_limited(),
        ButtonAction::ToggleLoopSides => controller.toggle_boundary_mode(),
        ButtonAction::Reset => {
            controller.reset();
            return true;
        }
    }
    false
}

/// Keyboard shortcuts. Returns true when the grid changed in bulk.
pub fn process_keyboard_input<R: Rng + ?Sized>(
    controller: &mut InteractionController,
    camera: &mut Camera,
    rng: &mut R,
) -> bool {
    let mut bulk_change = false;

    if is_key_pressed(KeyCode::Space) {
        controller.toggle_running();
    }
    if is_key_pressed(KeyCode::L) {
        controller.toggle_rate_limited();
    }
    if is_key_pressed(KeyCode::B) {
        controller.toggle_boundary_mode();
    }
    if is_key_pressed(KeyCode::C) {
        controller.reset();
        bulk_change = true;
    }
    if is_key_pressed(KeyCode::R) {
        bulk_change |= controller.randomize(rng, SOUP_DENSITY);
    }
    if is_key_pressed(KeyCode::G) {
        let (width, height) = controller.simulation().dimensions();
        let glider = presets::glider();
        bulk_change |= controller.place_pattern(&glider, width / 2, height / 2);
    }
    if is_key_pressed(KeyCode::H) {
        let grid = controller.simulation().dimensions();
        *camera = Camera::centered(grid, (screen_width(), screen_height()), CELL_SIZE);
    }

    bulk_change
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::{SeedableRng, rngs::StdRng};
    use crate::domain::SimulationConfig;

    #[test]
    fn test_soup_density_seeds_editable_grid() {
        let mut controller =
            InteractionController::new(&SimulationConfig::with_dimensions(20, 20)).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        assert!(controller.randomize(&mut rng, SOUP_DENSITY));
        let population = controller.simulation().population();
        assert!(population > 0 && population < 400);
    }
}
