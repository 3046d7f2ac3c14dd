use anyhow::{Context, Result};
use macroquad::prelude::*;
use tracing::{error, info};

use life_sandbox::{
    Camera, InteractionController, SimulationConfig,
    input, rendering::{self, CellSprites}, ui::{self, CELL_SIZE},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Life Sandbox".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn build_controller() -> Result<InteractionController> {
    let config = SimulationConfig::default();
    InteractionController::new(&config).context("failed to initialize simulation")
}

/// Grid cell under the cursor, if any
fn hovered_cell(camera: &Camera, mouse_pos: (f32, f32), grid: (usize, usize)) -> Option<(usize, usize)> {
    let (gx, gy) = camera.screen_to_grid(mouse_pos, CELL_SIZE);
    let (x, y) = (usize::try_from(gx).ok()?, usize::try_from(gy).ok()?);
    (x < grid.0 && y < grid.1).then_some((x, y))
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let mut controller = match build_controller() {
        Ok(controller) => controller,
        Err(err) => {
            error!("{err:#}");
            return;
        }
    };
    let grid = controller.simulation().dimensions();
    let mut camera = Camera::centered(grid, (screen_width(), screen_height()), CELL_SIZE);
    let mut sprites = CellSprites::new(controller.simulation());
    let mut rng = ::rand::rng();
    info!("Starting Life Sandbox host loop");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(&controller);

        // Input
        let mut resync = input::process_button_clicks(&mut controller, &buttons, mouse_pos);
        input::handle_zoom(&mut camera);
        if let Some(change) = input::handle_pointer(&mut controller, &mut camera, &buttons, mouse_pos) {
            sprites.apply(&[change]);
        }
        resync |= input::process_keyboard_input(&mut controller, &mut camera, &mut rng);

        // Simulation
        let report = controller.on_frame(f64::from(get_frame_time()));
        if resync {
            sprites.sync(controller.simulation());
        } else {
            sprites.apply(&report.changes);
        }

        // Render
        clear_background(BLACK);
        rendering::draw_grid(&sprites, &camera);
        let hover = hovered_cell(&camera, mouse_pos, grid);
        rendering::draw_controls(&controller, &buttons, hover, mouse_pos);

        next_frame().await;
    }

    controller.shutdown();
}
