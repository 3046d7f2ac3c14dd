use life_sandbox::{
    BoundaryMode, Cell, GridSimulation, InteractionController, SimulationConfig, SimulationError,
    presets,
};
use rand::{SeedableRng, rngs::StdRng};

fn alive_cells(sim: &GridSimulation) -> Vec<(usize, usize)> {
    sim.iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .map(|(x, y, _)| (x, y))
        .collect()
}

fn simulation(width: usize, height: usize, mode: BoundaryMode) -> GridSimulation {
    let config = SimulationConfig {
        boundary_mode: mode,
        ..SimulationConfig::with_dimensions(width, height)
    };
    GridSimulation::new(&config).unwrap()
}

#[test]
fn reset_kills_every_cell() {
    let mut sim = simulation(30, 20, BoundaryMode::Wrap);
    sim.fill_random(&mut StdRng::seed_from_u64(42), 0.5);
    sim.tick();
    assert!(sim.population() > 0);

    sim.reset();
    assert!(sim.iter_cells().all(|(_, _, cell)| cell == Cell::Dead));
    for y in 0..20 {
        for x in 0..30 {
            assert_eq!(sim.cell_state(x, y), Ok(Cell::Dead));
        }
    }
}

#[test]
fn toggle_is_visible_immediately_and_self_inverse() {
    let mut sim = simulation(8, 6, BoundaryMode::Wrap);
    for y in 0..6 {
        for x in 0..8 {
            let before = sim.cell_state(x, y).unwrap();
            sim.toggle_cell(x, y).unwrap();
            assert_eq!(sim.cell_state(x, y), Ok(before.toggle()));
            sim.toggle_cell(x, y).unwrap();
            assert_eq!(sim.cell_state(x, y), Ok(before));
        }
    }
}

#[test]
fn glider_translates_diagonally_every_four_ticks() {
    for mode in [BoundaryMode::Wrap, BoundaryMode::Bounded] {
        let mut sim = simulation(20, 20, mode);
        sim.place_pattern(&presets::glider(), 5, 5);
        let start = alive_cells(&sim);
        assert_eq!(start.len(), 5);

        for _ in 0..4 {
            sim.tick();
        }
        let expected: Vec<_> = start.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(alive_cells(&sim), expected, "boundary mode {mode:?}");
    }
}

#[test]
fn glider_wraps_around_the_torus() {
    let mut sim = simulation(8, 8, BoundaryMode::Wrap);
    sim.place_pattern(&presets::glider(), 0, 0);
    let start = alive_cells(&sim);

    // 8 cells of travel on an 8x8 torus lands back where it started
    for _ in 0..32 {
        sim.tick();
    }
    assert_eq!(alive_cells(&sim), start);
}

#[test]
fn block_is_a_still_life() {
    let mut sim = simulation(6, 6, BoundaryMode::Bounded);
    sim.place_pattern(&presets::block(), 2, 2);
    let start = alive_cells(&sim);
    for (x, y) in &start {
        assert_eq!(sim.neighbor_count(*x, *y), Ok(3));
    }

    for _ in 0..25 {
        assert!(sim.tick().is_empty());
    }
    assert_eq!(alive_cells(&sim), start);
}

#[test]
fn boundary_mode_changes_corner_neighbors() {
    let mut sim = simulation(10, 7, BoundaryMode::Wrap);
    sim.toggle_cell(0, 0).unwrap();

    assert_eq!(sim.neighbor_count(9, 6), Ok(1));
    assert_eq!(sim.neighbor_count(9, 0), Ok(1));
    assert_eq!(sim.neighbor_count(0, 6), Ok(1));

    sim.set_boundary_mode(BoundaryMode::Bounded);
    assert_eq!(sim.neighbor_count(9, 6), Ok(0));
    assert_eq!(sim.neighbor_count(9, 0), Ok(0));
    assert_eq!(sim.neighbor_count(1, 1), Ok(1));
}

#[test]
fn bounded_edges_starve_an_edge_blinker() {
    // A blinker against the top edge: vertical phase would need row -1
    let mut wrap = simulation(5, 5, BoundaryMode::Wrap);
    let mut bounded = simulation(5, 5, BoundaryMode::Bounded);
    for sim in [&mut wrap, &mut bounded] {
        for x in 1..=3 {
            sim.set_cell(x, 0, Cell::Alive).unwrap();
        }
        sim.tick();
    }
    assert_eq!(wrap.population(), 3);
    assert_eq!(wrap.cell_state(2, 4), Ok(Cell::Alive));
    assert_eq!(bounded.population(), 2);
    assert_eq!(bounded.cell_state(2, 4), Ok(Cell::Dead));
}

#[test]
fn evaluation_reads_only_committed_state() {
    // A row-major single-pass update would kill (1, 0) before its
    // neighbor (1, 1) is evaluated; two-phase keeps the blinker intact
    let mut sim = simulation(3, 3, BoundaryMode::Bounded);
    for x in 0..3 {
        sim.set_cell(x, 1, Cell::Alive).unwrap();
    }
    sim.tick();
    assert_eq!(alive_cells(&sim), vec![(1, 0), (1, 1), (1, 2)]);
    sim.tick();
    assert_eq!(alive_cells(&sim), vec![(0, 1), (1, 1), (2, 1)]);
}

#[test]
fn out_of_bounds_rejected_without_mutation() {
    let mut sim = simulation(5, 4, BoundaryMode::Wrap);
    sim.place_pattern(&presets::blinker(), 1, 1);
    let before = sim.grid().clone();

    let err = sim.toggle_cell(5, 0).unwrap_err();
    assert_eq!(
        err,
        SimulationError::OutOfBounds { x: 5, y: 0, width: 5, height: 4 }
    );
    assert!(sim.toggle_cell(0, 4).is_err());
    assert!(sim.cell_state(usize::MAX, 0).is_err());
    assert!(sim.cell_state(2, 4).is_err());
    assert_eq!(sim.grid(), &before);
}

#[test]
fn invalid_dimensions_fail_construction() {
    assert!(matches!(
        GridSimulation::with_dimensions(0, 0),
        Err(SimulationError::InvalidDimension { .. })
    ));
    assert!(InteractionController::new(&SimulationConfig::with_dimensions(10, 0)).is_err());
}

#[test]
fn rate_limited_frames_tick_on_interval() {
    let config = SimulationConfig::with_dimensions(10, 10);
    assert_eq!(config.tick_interval_secs, 0.5);
    let mut controller = InteractionController::new(&config).unwrap();
    controller.start();

    for _ in 0..5 {
        assert!(!controller.on_frame(0.1).ticked);
    }
    assert_eq!(controller.simulation().generation(), 0);
    assert!(controller.on_frame(0.1).ticked);
    assert_eq!(controller.simulation().generation(), 1);
}

#[test]
fn unlimited_frames_tick_every_call() {
    let config = SimulationConfig {
        rate_limited: false,
        ..SimulationConfig::with_dimensions(10, 10)
    };
    let mut controller = InteractionController::new(&config).unwrap();
    controller.start();

    for (i, delta) in [0.0, 0.001, 0.1, 2.0].into_iter().enumerate() {
        assert!(controller.on_frame(delta).ticked);
        assert_eq!(controller.simulation().generation(), i as u64 + 1);
    }
}

#[test]
fn editing_session_end_to_end() {
    let mut controller = InteractionController::new(&SimulationConfig::with_dimensions(12, 12)).unwrap();
    // Cells are 10 screen pixels wide, grid at the origin
    let project = |pos: (f32, f32)| ((pos.0 / 10.0).floor() as i32, (pos.1 / 10.0).floor() as i32);

    for (sx, sy) in [(45.0, 35.0), (45.0, 45.0), (45.0, 55.0)] {
        controller.on_pointer_down((sx, sy));
        controller.on_pointer_up((sx, sy), project);
    }
    assert_eq!(controller.simulation().population(), 3);

    controller.set_rate_limited(false);
    controller.start();
    let report = controller.on_frame(0.016);
    assert_eq!(report.changes.len(), 4);
    controller.stop();

    // Edits stay locked until reset
    controller.on_pointer_down((5.0, 5.0));
    assert!(controller.on_pointer_up((5.0, 5.0), project).is_none());
    controller.reset();
    controller.on_pointer_down((5.0, 5.0));
    assert!(controller.on_pointer_up((5.0, 5.0), project).is_some());
    assert_eq!(controller.simulation().cell_state(0, 0), Ok(Cell::Alive));
}
